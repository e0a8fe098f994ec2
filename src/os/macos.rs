//! macOS entropy via `arc4random_buf`, which cannot fail.

use std::io;

use libc::{arc4random_buf, c_void};

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
