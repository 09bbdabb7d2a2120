use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Drives an Elm-style loop: every event goes through `transition`, the new
/// state is rendered, and each resulting effect runs on its own thread and
/// reports back through the event channel.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool + Send + Sync,
{
    init: (TState, Vec<TEffect>),
    transition_fn: Arc<T>,
    render_fn: Arc<R>,
    run_effect_fn: Arc<E>,
    is_done_fn: Arc<D>,
    event_sender: Sender<TEvent>,
    event_receiver: Receiver<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, D> StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    TState: Send + 'static,
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn: Arc::new(is_done_fn),
            event_sender,
            event_receiver,
        }
    }

    /// Handle for sources outside the machine (UI callbacks) to post events.
    pub fn sender(&self) -> Sender<TEvent> {
        self.event_sender.clone()
    }

    /// Runs until `is_done` holds for the current state and returns it.
    pub fn run(self) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let (mut state, effects) = self.init;

        (self.render_fn)(&state);
        spawn_effects(&self.run_effect_fn, &self.event_sender, effects);

        while !(self.is_done_fn)(&state) {
            let event = self.event_receiver.recv()?;
            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);
            spawn_effects(&self.run_effect_fn, &self.event_sender, new_effects);
        }

        Ok(state)
    }
}

fn spawn_effects<TEvent, TEffect, E>(
    run_effect_fn: &Arc<E>,
    event_sender: &Sender<TEvent>,
    effects: Vec<TEffect>,
) where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    for effect in effects {
        let effect_sender = event_sender.clone();
        let run_effect_fn = Arc::clone(run_effect_fn);
        std::thread::spawn(move || {
            run_effect_fn(effect, effect_sender);
        });
    }
}
