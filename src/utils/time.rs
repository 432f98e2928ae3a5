use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::time::SystemTime;

pub fn local_time(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

pub fn modified(metadata: &Metadata) -> std::io::Result<DateTime<Local>> {
    metadata.modified().map(local_time)
}

/// Creation time as the OS reports it. Unix has no portable birth time in
/// `stat`, so this is the inode change time there.
#[cfg(unix)]
pub fn created(metadata: &Metadata) -> std::io::Result<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let utc = DateTime::from_timestamp(metadata.ctime(), metadata.ctime_nsec() as u32)
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "ctime out of range for a timestamp",
            )
        })?;
    Ok(utc.with_timezone(&Local))
}

#[cfg(not(unix))]
pub fn created(metadata: &Metadata) -> std::io::Result<DateTime<Local>> {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(local_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_local_time_keeps_instant() {
        let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(local_time(t).timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_file_times_are_recent() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let metadata = file.as_file().metadata().unwrap();
        let now = Local::now();

        let mtime = modified(&metadata).unwrap();
        let ctime = created(&metadata).unwrap();
        assert!((now - mtime).num_seconds().abs() < 60);
        assert!((now - ctime).num_seconds().abs() < 60);
    }
}
