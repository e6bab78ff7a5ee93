//! Platform selection and OS scan command execution.
//!
//! Scanning shells out to the tools the OS already ships: `nmcli` on Linux and
//! `netsh` on Windows. The raw text is handed to the parser unchanged.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use tracing::{debug, warn};

use super::ScanError;

/// Host operating systems with a supported scan command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Maps an OS identifier (`Linux`, `windows`, ...) to a platform.
    ///
    /// Anything other than Linux or Windows is rejected; there is no fallback.
    pub fn from_os_name(name: &str) -> Result<Self, ScanError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            _ => Err(ScanError::UnsupportedPlatform(name.to_string())),
        }
    }

    /// Platform of the running host.
    pub fn detect() -> Result<Self, ScanError> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Program and fixed arguments of the scan command.
    pub fn scan_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::Linux => ("nmcli", NMCLI_ARGS),
            Platform::Windows => ("netsh", NETSH_ARGS),
        }
    }
}

/// Terse output with exactly the five fields the parser expects, in order.
const NMCLI_ARGS: &[&str] = &[
    "-t",
    "-f",
    "SSID,SIGNAL,CHAN,BSSID,SECURITY",
    "device",
    "wifi",
    "list",
];

const NETSH_ARGS: &[&str] = &["wlan", "show", "network", "mode=Bssid"];

impl FromStr for Platform {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_os_name(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}

/// Anything that can produce raw scan text for a known platform.
pub trait ScanSource {
    /// Platform whose output format `scan` returns.
    fn platform(&self) -> Platform;

    /// Runs one scan and returns its raw text.
    fn scan(&self) -> Result<String, ScanError>;
}

impl<T: ScanSource + ?Sized> ScanSource for &T {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn scan(&self) -> Result<String, ScanError> {
        (**self).scan()
    }
}

impl<T: ScanSource + ?Sized> ScanSource for Box<T> {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn scan(&self) -> Result<String, ScanError> {
        (**self).scan()
    }
}

/// Runs a scan command and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandScanner {
    platform: Platform,
    program: String,
    args: Vec<String>,
}

impl CommandScanner {
    /// Scanner running the platform's own scan command.
    pub fn new(platform: Platform) -> Self {
        let (program, args) = platform.scan_command();
        Self::with_command(platform, program, args.iter().copied())
    }

    /// Scanner running `program` instead; its output is parsed as `platform`'s format.
    pub fn with_command<I, A>(platform: Platform, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            platform,
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Scanner for the running host; fails before spawning anything on
    /// unsupported systems.
    pub fn for_host() -> Result<Self, ScanError> {
        Ok(Self::new(Platform::detect()?))
    }
}

impl ScanSource for CommandScanner {
    fn platform(&self) -> Platform {
        self.platform
    }

    /// A nonzero exit or a missing program is logged, not raised: the parser
    /// receives whatever stdout was produced (possibly empty).
    fn scan(&self) -> Result<String, ScanError> {
        debug!("Running scan command: {} {}", self.program, self.args.join(" "));

        let output = match Command::new(&self.program).args(&self.args).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run {}: {} - treating scan as empty", self.program, e);
                return Ok(String::new());
            }
        };

        if !output.status.success() {
            warn!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Replays a previously captured scan output file on every scan.
#[derive(Debug, Clone)]
pub struct CaptureFileScanner {
    platform: Platform,
    path: PathBuf,
}

impl CaptureFileScanner {
    pub fn new(platform: Platform, path: impl AsRef<Path>) -> Self {
        Self {
            platform,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScanSource for CaptureFileScanner {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn scan(&self) -> Result<String, ScanError> {
        debug!("Replaying scan capture from {}", self.path.display());
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms() {
        assert_eq!(Platform::from_os_name("Linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_name("linux").unwrap(), Platform::Linux);
        assert_eq!(
            Platform::from_os_name("Windows").unwrap(),
            Platform::Windows
        );
    }

    #[test]
    fn test_unsupported_platform_rejected() {
        let err = Platform::from_os_name("Darwin").unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedPlatform(ref name) if name == "Darwin"));
        assert!("macos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_scan_commands() {
        let (program, args) = Platform::Linux.scan_command();
        assert_eq!(program, "nmcli");
        assert!(args.contains(&"SSID,SIGNAL,CHAN,BSSID,SECURITY"));

        let (program, args) = Platform::Windows.scan_command();
        assert_eq!(program, "netsh");
        assert_eq!(args.last(), Some(&"mode=Bssid"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_scanner_keeps_stdout_on_nonzero_exit() {
        let scanner =
            CommandScanner::with_command(Platform::Linux, "sh", ["-c", "echo x; exit 3"]);
        assert_eq!(scanner.scan().unwrap(), "x\n");
    }

    #[test]
    fn test_command_scanner_missing_program_is_empty_scan() {
        let scanner = CommandScanner::with_command(
            Platform::Linux,
            "pulsepilot-no-such-scan-tool",
            Vec::<String>::new(),
        );
        assert_eq!(scanner.scan().unwrap(), "");
    }

    #[test]
    fn test_command_scanner_uses_platform_command() {
        let scanner = CommandScanner::new(Platform::Windows);
        assert_eq!(scanner.program, "netsh");
        assert_eq!(scanner.args, ["wlan", "show", "network", "mode=Bssid"]);
        assert_eq!(scanner.platform(), Platform::Windows);
    }

    #[test]
    fn test_capture_file_scanner_replays_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Home:70:6:AA\\:BB\\:CC\\:DD\\:EE\\:FF:WPA2\n")
            .unwrap();

        let scanner = CaptureFileScanner::new(Platform::Linux, file.path());
        assert_eq!(scanner.platform(), Platform::Linux);
        assert_eq!(scanner.path(), file.path());
        let first = scanner.scan().unwrap();
        let second = scanner.scan().unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Home:70"));
    }

    #[test]
    fn test_capture_file_scanner_missing_file() {
        let scanner = CaptureFileScanner::new(Platform::Linux, "/nonexistent/pulsepilot.txt");
        assert!(matches!(scanner.scan(), Err(ScanError::Io(_))));
    }
}
