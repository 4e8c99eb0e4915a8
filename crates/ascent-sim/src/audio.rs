//! Single-channel audio model.
//!
//! Tracks which clip is playing and for how long; no mixing.

use ascent_core::constants::{DEATH_CLIP_SECS, MAIN_ENGINE_CLIP_SECS, SUCCESS_CLIP_SECS};
use ascent_core::enums::Clip;
use ascent_core::state::AudioView;

pub fn clip_length(clip: Clip) -> f64 {
    match clip {
        Clip::MainEngine => MAIN_ENGINE_CLIP_SECS,
        Clip::Success => SUCCESS_CLIP_SECS,
        Clip::Death => DEATH_CLIP_SECS,
    }
}

#[derive(Debug, Clone, Default)]
pub struct AudioState {
    playing: Option<Clip>,
    remaining_secs: f64,
}

impl AudioState {
    pub fn play_one_shot(&mut self, clip: Clip) {
        self.playing = Some(clip);
        self.remaining_secs = clip_length(clip);
    }

    pub fn stop(&mut self) {
        self.playing = None;
        self.remaining_secs = 0.0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Run the clip clock forward; the channel goes quiet when the clip ends.
    pub fn advance(&mut self, dt: f64) {
        if self.playing.is_none() {
            return;
        }
        self.remaining_secs -= dt;
        if self.remaining_secs <= 0.0 {
            self.stop();
        }
    }

    pub fn view(&self) -> AudioView {
        AudioView {
            playing: self.playing,
            remaining_secs: self.remaining_secs.max(0.0),
        }
    }
}
