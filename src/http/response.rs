use crate::constants::HEADER_BODY_DELIMITER;
use crate::output::Logger;

/// One inbound chunk, split at its first blank line.
///
/// Chunks are not reassembled: a response whose delimiter lands in a later
/// chunk is seen as header text only, and later chunks are split on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub header: String,
    pub body: Option<String>,
}

impl ResponseFrame {
    pub fn from_chunk(chunk: &[u8]) -> Self {
        let text = String::from_utf8_lossy(chunk);
        match text.split_once(HEADER_BODY_DELIMITER) {
            Some((header, body)) => Self {
                header: header.to_string(),
                body: Some(body.to_string()),
            },
            None => Self {
                header: text.into_owned(),
                body: None,
            },
        }
    }
}

/// Routes response text to the logger: headers at debug, body at info
pub struct ResponseHandler<'a> {
    logger: &'a dyn Logger,
}

impl<'a> ResponseHandler<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self { logger }
    }

    pub fn on_data(&mut self, chunk: &[u8]) {
        let frame = ResponseFrame::from_chunk(chunk);
        self.logger.debug(&frame.header);
        if let Some(body) = &frame.body {
            self.logger.info(body);
        }
    }
}
