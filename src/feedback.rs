//! Feedback sink for automaton fires.
//!
//! The original game pulses the device vibrator when the automaton step
//! hits. The rules core only needs a no-argument, fire-and-forget trigger;
//! implementations must swallow their own failures (a missing vibrator is
//! not the rules' problem).

/// Receives a notification each time the automaton fires.
pub trait FeedbackSink {
    fn automaton_fired(&mut self);
}

/// Discards all notifications. The default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn automaton_fired(&mut self) {}
}
