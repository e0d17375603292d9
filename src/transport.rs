use embassy_net::{
    dns::{DnsQueryType, Error as DnsError},
    tcp::{ConnectError, TcpSocket},
    Stack,
};
use embassy_time::Duration;
use embedded_io_async::{ErrorType, Read, Write};

use crate::constants::SOCKET_TIMEOUT_SECS;

const MAX_RETRIES: usize = 3;

#[derive(Debug)]
pub enum Error {
    #[allow(dead_code)]
    DnsQueryFailed(DnsError),
    DnsLookupFailed,
    #[allow(dead_code)]
    SocketConnectionError(ConnectError),
}

/// Plain TCP connection to the broker
pub struct Transport<'a> {
    socket: TcpSocket<'a>,
}

impl<'a> Transport<'a> {
    pub async fn new(
        stack: Stack<'static>,
        rx_buffer: &'a mut [u8],
        tx_buffer: &'a mut [u8],
        hostname: &str,
        port: u16,
    ) -> Result<Self, Error> {
        let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(SOCKET_TIMEOUT_SECS)));

        let addr = stack
            .dns_query(hostname, DnsQueryType::A)
            .await
            .map_err(Error::DnsQueryFailed)?
            .first()
            .copied()
            .ok_or(Error::DnsLookupFailed)?;

        log::info!("Connecting TCP socket to {}:{}", hostname, port);
        socket
            .connect((addr, port))
            .await
            .map_err(Error::SocketConnectionError)?;
        log::info!("TCP connected");

        Ok(Self { socket })
    }
}

impl ErrorType for Transport<'_> {
    type Error = embassy_net::tcp::Error;
}

impl Read for Transport<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.socket.read(buf).await?;
        log::debug!("Transport read: {} bytes", n);
        Ok(n)
    }
}

impl Write for Transport<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for attempt in 0..MAX_RETRIES {
            match self.socket.write(buf).await {
                Ok(n) => {
                    // rust-mqtt never flushes and the station sleeps right
                    // after publishing, so push every packet out now
                    self.socket.flush().await?;
                    log::debug!("Transport write: {} bytes sent", n);
                    return Ok(n);
                }
                Err(e) => {
                    log::warn!("write attempt {} failed: {:?}", attempt + 1, e);
                    if attempt + 1 == MAX_RETRIES {
                        return Err(e);
                    }
                }
            }
        }
        unreachable!()
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        for attempt in 0..MAX_RETRIES {
            match self.socket.flush().await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::warn!("flush attempt {} failed: {:?}", attempt + 1, e);
                    if attempt + 1 == MAX_RETRIES {
                        return Err(e);
                    }
                }
            }
        }
        unreachable!()
    }
}
