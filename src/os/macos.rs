use libc::arc4random_buf;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// `arc4random_buf` cannot fail; the `Result` exists to match the other
/// platform implementations.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), i32> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
