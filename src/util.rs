use std::cell::RefCell;

pub(crate) const ERR_WRITING: &str = "writing failed";
pub(crate) const ERR_FORMATTING: &str = "formatting failed";
pub(crate) const ERR_POISONED: &str = "output is poisoned";

// Problems of the logging machinery itself can't be logged through it.
pub(crate) fn write_err(msg: &str, err: &dyn std::error::Error) {
    eprintln!("[log_shims] {msg} with {err}");
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}
