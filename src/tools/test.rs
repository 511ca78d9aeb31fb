#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::SystemTime;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub fn temp_dir() -> PathBuf {
        let buf = std::env::temp_dir().join(format!(
            "maillog-{}-{}",
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap()
                .as_micros(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&buf).unwrap();

        buf
    }

    /// Write a file named `filename` with `contents` into a fresh temporary directory.
    pub fn create_file(filename: &str, contents: &[u8]) -> PathBuf {
        let path = temp_dir().join(filename);
        fs::write(&path, contents).unwrap();

        path
    }
}
