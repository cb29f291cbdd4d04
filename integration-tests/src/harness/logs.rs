use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const EXAMPLE_LINE: &str = r#"24.99.237.149 - - [30/Jun/2018:12:31:51 -0400] "GET /minecraft/get-log?offset=188 HTTP/1.1" 200 26 "https://snooky.biz/minecraft" "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/67.0.3396.99 Safari/537.36""#;

pub fn combined_line(ip: &str, target: &str, agent: &str) -> String {
    format!(
        r#"{ip} - - [01/Jul/2018:08:00:00 +0000] "GET {target} HTTP/1.1" 200 512 "-" "{agent}""#
    )
}

pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body(lines)).unwrap();
    path
}

/// Writes a rotated, gzip compressed log.
pub fn write_gz_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(body(lines).as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn body(lines: &[String]) -> String {
    let mut body = lines.join("\n");
    body.push('\n');
    body
}
