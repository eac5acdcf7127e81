//! Audio and speech cue boundary
//!
//! The simulation queues [`CueEvent`]s as plain data; the host drains them
//! each tick and hands them to a sink. Playback is fire-and-forget: the
//! simulation never waits on it, and sink failures are logged and
//! swallowed rather than surfaced to gameplay.

use crate::sim::CueEvent;

/// Sink for game cues, implemented by the platform audio layer
pub trait AudioSink {
    /// Play a short synthesized effect for the cue
    fn play(&mut self, cue: CueEvent);

    /// Narrate a line through the speech synthesizer
    fn narrate(&mut self, line: &str);

    /// Route a batch of drained cues: distress goes to the narrator,
    /// everything else to the effect synth
    fn dispatch(&mut self, cues: impl IntoIterator<Item = CueEvent>)
    where
        Self: Sized,
    {
        for cue in cues {
            match cue {
                CueEvent::Distress { taunt } => self.narrate(taunt),
                other => self.play(other),
            }
        }
    }
}

/// Sink that just logs; the default for headless hosts and tests
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: CueEvent) {
        log::debug!("audio cue: {cue:?}");
    }

    fn narrate(&mut self, line: &str) {
        log::info!("narration: {line}");
    }
}
