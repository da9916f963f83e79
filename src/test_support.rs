//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};

use crate::console::Console;
use crate::core::navigator::{Screen, View};

/// Remembers every view it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub views: Vec<View>,
}

#[async_trait]
impl Screen for RecordingScreen {
    async fn show(&mut self, view: View) -> io::Result<()> {
        self.views.push(view);
        Ok(())
    }
}

/// A screen whose output is always broken.
pub struct FailingScreen;

#[async_trait]
impl Screen for FailingScreen {
    async fn show(&mut self, _view: View) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "screen closed"))
    }
}

/// A reader that never produces a line, like a user who walked away.
pub struct PendingReader;

impl AsyncRead for PendingReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Pending
    }
}

impl AsyncBufRead for PendingReader {
    fn poll_fill_buf(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Poll::Pending
    }

    fn consume(self: Pin<&mut Self>, _amt: usize) {}
}

/// Creates a console that reads `input` and collects output, with no pacing.
pub fn scripted_console(input: &'static [u8]) -> Console<&'static [u8], Vec<u8>> {
    Console::new(input, Vec::new(), Duration::ZERO)
}
