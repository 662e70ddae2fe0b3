//! SNTP time acquisition over UDP.
//!
//! One mode-3 (client) exchange per call: send a 48-byte request, read the
//! server's transmit timestamp, convert from the NTP epoch (1900) to the
//! Unix epoch (1970). Round-trip correction is skipped: the display
//! resolves whole seconds and the clock free-runs between syncs, so
//! half-RTT precision buys nothing here.

use std::net::UdpSocket;
use std::time::Duration;

use log::info;
use thiserror::Error;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// Standard NTP port.
const NTP_PORT: u16 = 123;

/// Read timeout for the response datagram.
const SOCKET_TIMEOUT: Duration = Duration::from_secs(2);

/// Highest stratum accepted from a server; 0 is "kiss-o'-death", 16 means
/// unsynchronized.
const MAX_STRATUM: u8 = 15;

#[derive(Debug, Error)]
pub enum SntpError {
    #[error("socket error: {0}")]
    Socket(#[from] std::io::Error),
    #[error("short or malformed response")]
    InvalidResponse,
    #[error("server stratum {0} out of range")]
    BadStratum(u8),
}

/// A source of wall-clock time, in Unix seconds.
///
/// The sync screen and [`crate::clock::TimeKeeper::service`] drive this;
/// tests substitute scripted sources.
pub trait TimeSource {
    fn fetch_unix_time(&mut self) -> Result<i64, SntpError>;
}

/// SNTP client bound to one configured server.
pub struct SntpClient {
    server: String,
}

impl SntpClient {
    pub fn new(server: &str) -> Self {
        Self {
            server: server.to_string(),
        }
    }
}

impl TimeSource for SntpClient {
    fn fetch_unix_time(&mut self) -> Result<i64, SntpError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.set_read_timeout(Some(SOCKET_TIMEOUT))?;

        // NTP request header: LI=0, VN=3, Mode=3 (client).
        let mut request = [0u8; 48];
        request[0] = 0x1B;
        socket.send_to(&request, (self.server.as_str(), NTP_PORT))?;

        let mut response = [0u8; 48];
        let (len, _from) = socket.recv_from(&mut response)?;

        let unix = parse_transmit_time(&response[..len])?;
        info!("SNTP sync from {}: unix {}", self.server, unix);
        Ok(unix)
    }
}

/// Validate a response datagram and extract its transmit timestamp as Unix
/// seconds. The transmit timestamp's integer part lives at bytes 40..44.
fn parse_transmit_time(response: &[u8]) -> Result<i64, SntpError> {
    if response.len() < 48 {
        return Err(SntpError::InvalidResponse);
    }

    let stratum = response[1];
    if stratum == 0 || stratum > MAX_STRATUM {
        return Err(SntpError::BadStratum(stratum));
    }

    let ntp_secs = u64::from(u32::from_be_bytes([
        response[40],
        response[41],
        response[42],
        response[43],
    ]));
    if ntp_secs < NTP_UNIX_OFFSET {
        return Err(SntpError::InvalidResponse);
    }

    Ok((ntp_secs - NTP_UNIX_OFFSET) as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================
