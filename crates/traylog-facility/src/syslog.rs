//! Syslog sink

use crate::{Handler, HostLevel, Layout, LogRecord};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::UnixDatagram;
#[cfg(unix)]
use std::path::PathBuf;
use traylog_core::{LogError, LogResult};

/// Default syslog endpoint
pub const DEFAULT_SYSLOG_ADDRESS: &str = "localhost:514";

/// The `user` syslog facility
pub const LOG_USER: u8 = 1;

/// Where syslog datagrams are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyslogTarget {
    /// `host:port` over UDP
    Udp(String),
    /// Local Unix datagram socket, e.g. `/dev/log`
    #[cfg(unix)]
    Unix(PathBuf),
}

impl Default for SyslogTarget {
    fn default() -> Self {
        SyslogTarget::Udp(DEFAULT_SYSLOG_ADDRESS.to_string())
    }
}

enum Transport {
    Udp(UdpSocket, SocketAddr),
    #[cfg(unix)]
    Unix(UnixDatagram),
}

/// Sends each record as one syslog datagram: `<PRI>` + line + NUL
pub struct SyslogSink {
    transport: Transport,
    facility: u8,
    layout: Layout,
}

impl SyslogSink {
    /// Connect to the default UDP endpoint
    pub fn new() -> LogResult<Self> {
        Self::connect(&SyslogTarget::default())
    }

    /// Open a socket for the given target
    pub fn connect(target: &SyslogTarget) -> LogResult<Self> {
        let transport = match target {
            SyslogTarget::Udp(address) => {
                let (socket, remote) = bind_udp(address)?;
                Transport::Udp(socket, remote)
            }
            #[cfg(unix)]
            SyslogTarget::Unix(path) => {
                let socket = UnixDatagram::unbound()?;
                socket.connect(path)?;
                Transport::Unix(socket)
            }
        };
        Ok(Self {
            transport,
            facility: LOG_USER,
            layout: Layout::Timestamped,
        })
    }

    /// Use a different layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Encode a record as a syslog datagram payload
    pub fn encode(&self, record: &LogRecord) -> String {
        let priority = (self.facility << 3) | severity_code(record.level());
        format!("<{}>{}\0", priority, self.layout.format(record))
    }
}

impl Handler for SyslogSink {
    fn name(&self) -> &str {
        "syslog"
    }

    fn emit(&mut self, record: &LogRecord) -> LogResult<()> {
        let payload = self.encode(record);
        match &self.transport {
            Transport::Udp(socket, remote) => socket.send_to(payload.as_bytes(), remote)?,
            #[cfg(unix)]
            Transport::Unix(socket) => socket.send(payload.as_bytes())?,
        };
        Ok(())
    }
}

/// Syslog severity for a facility level, rounding down to the nearest named level
///
/// TRACE and anything below DEBUG are sent as debug (7).
pub fn severity_code(level: HostLevel) -> u8 {
    if level >= HostLevel::CRITICAL {
        2
    } else if level >= HostLevel::ERROR {
        3
    } else if level >= HostLevel::WARNING {
        4
    } else if level >= HostLevel::INFO {
        6
    } else {
        7
    }
}

// The socket stays unconnected: an absent daemon must not fail later sends
fn bind_udp(address: &str) -> LogResult<(UdpSocket, SocketAddr)> {
    let remote = address
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| LogError::Config(format!("syslog address {} did not resolve", address)))?;
    let local: SocketAddr = match remote {
        SocketAddr::V4(_) => ([0u8; 4], 0).into(),
        SocketAddr::V6(_) => ([0u16; 8], 0).into(),
    };
    Ok((UdpSocket::bind(local)?, remote))
}
