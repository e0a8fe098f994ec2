//! Linux entropy via the `getrandom` system call.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` from the kernel entropy pool.
///
/// Short reads are resumed and `EINTR` is retried; any other failure is
/// returned to the caller.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let remaining = &mut buf[filled..];
        let ret = unsafe { getrandom(remaining.as_mut_ptr() as *mut c_void, remaining.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
