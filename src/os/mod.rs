//! Operating system entropy.
//!
//! [`sys_random`] fills a buffer with kernel-provided random bytes. It is
//! only used to seed [`Csprng`](crate::rng::Csprng); the sharing engine
//! itself never talks to the OS.
//!
//! The platform backend is selected at compile time. Targets without one
//! report [`std::io::ErrorKind::Unsupported`] and callers must inject
//! their own randomness source.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub(crate) use linux::sys_random;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub(crate) use macos::sys_random;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) use unsupported::sys_random;
