//! One-shot SNTP query. The station has no battery backed clock, so every wake
//! cycle asks the configured server for the current time.

use core::net::{IpAddr, SocketAddr};

use embassy_net::{
    dns::DnsQueryType,
    udp::{PacketMetadata, UdpSocket},
    IpEndpoint, Stack,
};
use embassy_time::{with_timeout, Duration};
use sntpc::{get_time, NtpContext, NtpTimestampGenerator, NtpUdpSocket};

use crate::constants::{NTP_BUFFER_SIZE, NTP_PORT, NTP_TIMEOUT_SECS};

#[derive(Debug)]
pub enum Error {
    DnsLookupFailed,
    SocketBindFailed,
    Timeout,
    #[allow(dead_code)]
    Sntp(sntpc::Error),
}

/// Nothing to offer before the first sync; the server time is taken as is.
#[derive(Clone, Copy, Default)]
struct Unsynchronised;

impl NtpTimestampGenerator for Unsynchronised {
    fn init(&mut self) {}

    fn timestamp_sec(&self) -> u64 {
        0
    }

    fn timestamp_subsec_micros(&self) -> u32 {
        0
    }
}

struct Socket<'a> {
    socket: UdpSocket<'a>,
}

impl NtpUdpSocket for Socket<'_> {
    async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> sntpc::Result<usize> {
        let endpoint = IpEndpoint::new(addr.ip().into(), addr.port());
        self.socket
            .send_to(buf, endpoint)
            .await
            .map_err(|_| sntpc::Error::Network)?;
        Ok(buf.len())
    }

    async fn recv_from(&self, buf: &mut [u8]) -> sntpc::Result<(usize, SocketAddr)> {
        let (len, meta) = self
            .socket
            .recv_from(buf)
            .await
            .map_err(|_| sntpc::Error::Network)?;
        Ok((len, SocketAddr::new(meta.endpoint.addr.into(), meta.endpoint.port)))
    }
}

/// Current UTC time in seconds since the Unix epoch
pub async fn unix_time(stack: Stack<'static>, server: &str) -> Result<i64, Error> {
    let addr = stack
        .dns_query(server, DnsQueryType::A)
        .await
        .map_err(|_| Error::DnsLookupFailed)?
        .first()
        .copied()
        .ok_or(Error::DnsLookupFailed)?;

    let mut rx_meta = [PacketMetadata::EMPTY; 1];
    let mut rx_buffer = [0u8; NTP_BUFFER_SIZE];
    let mut tx_meta = [PacketMetadata::EMPTY; 1];
    let mut tx_buffer = [0u8; NTP_BUFFER_SIZE];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(NTP_PORT).map_err(|_| Error::SocketBindFailed)?;
    let socket = Socket { socket };

    let server_addr = SocketAddr::new(IpAddr::from(addr), NTP_PORT);
    let context = NtpContext::new(Unsynchronised);

    let result = with_timeout(
        Duration::from_secs(NTP_TIMEOUT_SECS),
        get_time(server_addr, &socket, context),
    )
    .await
    .map_err(|_| Error::Timeout)?
    .map_err(Error::Sntp)?;

    log::info!("SNTP: {} -> {} s", server, result.sec());
    Ok(i64::from(result.sec()))
}
