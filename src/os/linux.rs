//! Operating system abstraction layer (Linux)
//!
//! On Linux, cryptographically secure random bytes are obtained with the
//! `getrandom` system call, which reads directly from the kernel entropy
//! pool and is suitable for security-critical use cases.

use std::io::Error;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// This function repeatedly calls the Linux `getrandom` system call until
/// the entire buffer is filled. Partial reads are handled transparently,
/// which can occur depending on kernel behavior or signal interruptions.
///
/// # Errors
/// Returns the errno reported by a failing `getrandom` call. No bytes
/// written before the failure are considered usable.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on success.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), i32> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(Error::last_os_error().raw_os_error().unwrap_or(-1));
        }

        filled += ret as usize;
    }

    Ok(())
}
