use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use log::{debug, warn};
use std::thread::{self, JoinHandle};

// Sound effects the engine asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Move,
    Rotate,
    Drop,
    LineClear,
    LevelUp,
    GameOver,
}

/// Optional side-effect hook for audio or visual feedback. The engine behaves
/// identically with or without one attached.
pub trait Assist {
    fn play(&mut self, effect: SoundEffect);
}

// Command to control the audio thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(SoundEffect),
    Quit,
}

const AUDIO_QUEUE_CAPACITY: usize = 64;

/// Forwards effects to a consumer over a bounded channel without ever blocking
/// the game thread. A full or disconnected queue drops the effect.
pub struct AudioState {
    sender: Option<Sender<AudioCommand>>,
    worker: Option<JoinHandle<()>>,
    sound_enabled: bool,
}

impl AudioState {
    /// Starts a consumer thread that hands each effect to `handler`.
    pub fn spawn<F>(handler: F) -> Self
    where
        F: FnMut(SoundEffect) + Send + 'static,
    {
        let (sender, receiver) = bounded(AUDIO_QUEUE_CAPACITY);
        let worker = thread::spawn(move || run_audio_thread(&receiver, handler));

        Self {
            sender: Some(sender),
            worker: Some(worker),
            sound_enabled: true,
        }
    }

    /// Returns the state together with the receiving end, for callers that
    /// drain the queue themselves.
    #[must_use]
    pub fn with_channel(capacity: usize) -> (Self, Receiver<AudioCommand>) {
        let (sender, receiver) = bounded(capacity);
        let state = Self {
            sender: Some(sender),
            worker: None,
            sound_enabled: true,
        };
        (state, receiver)
    }

    /// An assist with nowhere to send effects.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            sender: None,
            worker: None,
            sound_enabled: false,
        }
    }

    pub fn play_sound(&self, effect: SoundEffect) -> bool {
        if !self.sound_enabled {
            return false;
        }
        let Some(sender) = &self.sender else {
            return false;
        };
        match sender.try_send(AudioCommand::Play(effect)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("Audio queue full, dropping {effect:?}");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    #[must_use]
    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }
}

impl Assist for AudioState {
    fn play(&mut self, effect: SoundEffect) {
        self.play_sound(effect);
    }
}

impl Drop for AudioState {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            // The worker also stops once every sender is gone
            let _ = sender.try_send(AudioCommand::Quit);
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Audio thread panicked");
            }
        }
    }
}

fn run_audio_thread<F>(receiver: &Receiver<AudioCommand>, mut handler: F)
where
    F: FnMut(SoundEffect),
{
    for command in receiver {
        match command {
            AudioCommand::Play(effect) => handler(effect),
            AudioCommand::Quit => break,
        }
    }
}
