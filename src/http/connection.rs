use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::constants::READ_BUFFER_SIZE;
use crate::error::CurlError;
use crate::http::response::ResponseHandler;
use crate::output::Logger;

/// Lifecycle of the single outbound connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Open,
    Closed,
    /// A socket error occurred; the socket has been shut down.
    Errored,
}

/// One TCP connection, used for exactly one request/response exchange
pub struct Connection<'a> {
    host: String,
    port: u16,
    state: ConnectionState,
    logger: &'a dyn Logger,
}

impl<'a> Connection<'a> {
    pub fn new(host: &str, port: u16, logger: &'a dyn Logger) -> Self {
        Self {
            host: host.to_string(),
            port,
            state: ConnectionState::Idle,
            logger,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Connect, write `request` once, then hand every inbound chunk to
    /// `handler` until the peer closes the connection.
    ///
    /// There is no timeout: a peer that neither answers nor closes keeps
    /// this future pending.
    pub async fn open(
        &mut self,
        request: &[u8],
        handler: &mut ResponseHandler<'_>,
    ) -> Result<(), CurlError> {
        if self.state != ConnectionState::Idle {
            return Err(CurlError::SocketConnectionError(io::Error::other(
                "connection already used",
            )));
        }

        self.state = ConnectionState::Connecting;
        let connected = TcpStream::connect((self.host.as_str(), self.port)).await;
        let mut stream = match connected {
            Ok(stream) => stream,
            Err(e) => return Err(self.fail(None, e).await),
        };
        self.state = ConnectionState::Open;
        self.logger
            .debug(&format!("Connected to {}:{}", self.host, self.port));

        let written = stream.write_all(request).await;
        if let Err(e) = written {
            return Err(self.fail(Some(stream), e).await);
        }

        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        loop {
            let read = stream.read(&mut buf).await;
            match read {
                Ok(0) => {
                    // Peer already closed; shutting down our half may fail harmlessly.
                    let _ = stream.shutdown().await;
                    self.state = ConnectionState::Closed;
                    return Ok(());
                }
                Ok(n) => handler.on_data(&buf[..n]),
                Err(e) => return Err(self.fail(Some(stream), e).await),
            }
        }
    }

    async fn fail(&mut self, stream: Option<TcpStream>, error: io::Error) -> CurlError {
        self.logger.error(&format!("Error: {}", error));
        if let Some(mut stream) = stream {
            let _ = stream.shutdown().await;
        }
        self.state = ConnectionState::Errored;
        CurlError::SocketConnectionError(error)
    }
}
