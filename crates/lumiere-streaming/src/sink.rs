//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use lumiere_core::{LifecyclePhase, TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => return Err(WorkloadError::ShellNotSent),
            SinkState::Completed => {
                return Err(WorkloadError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send the shell closing markup and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), WorkloadError> {
        self.send_section("closing", closing).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.bytes_sent += html.len();
        Ok(())
    }

    /// Names of the sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total body bytes written.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(name) => LifecyclePhase::SectionSent(name.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
