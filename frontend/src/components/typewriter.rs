use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Where the animator is in its type/hold/erase cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub erase_ms: u32,
    pub pause_ms: u32,
}

/// Cycles through a word list one character at a time.
///
/// The machine knows nothing about clocks: the owner asks for
/// [`Typewriter::next_delay`], waits that long and calls [`Typewriter::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    word_index: usize,
    revealed: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` for an empty word list, there is nothing to animate.
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            timing,
            word_index: 0,
            revealed: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    fn current_len(&self) -> usize {
        self.current_word().chars().count()
    }

    /// Milliseconds to wait before the next call to [`Typewriter::step`].
    pub fn next_delay(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.timing.type_ms,
            Phase::Paused => self.timing.pause_ms,
            Phase::Deleting => self.timing.erase_ms,
        }
    }

    pub fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                if self.revealed < len {
                    self.revealed += 1;
                }
                if self.revealed >= len {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.revealed = self.revealed.saturating_sub(1);
                if self.revealed == 0 {
                    self.phase = Phase::Typing;
                    self.word_index = (self.word_index + 1) % self.words.len();
                }
            }
        }
    }

    /// The revealed prefix of the current word, cut on a char boundary.
    pub fn visible_text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.revealed) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }
}

/// Cursor visibility after `elapsed_ms` when it flips every `toggle_ms`.
/// Starts visible.
pub fn cursor_visible_at(elapsed_ms: u64, toggle_ms: u64) -> bool {
    if toggle_ms == 0 {
        return true;
    }
    (elapsed_ms / toggle_ms) % 2 == 0
}

const CURSOR_TOGGLE_MS: u32 = 500;

/// Liveness flag shared with timer callbacks. Once the guard is dropped a
/// gated callback does nothing, even if its timer had already fired.
struct TimerGuard(Rc<Cell<bool>>);

impl TimerGuard {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn gate<F: FnMut() + 'static>(&self, mut callback: F) -> impl FnMut() + 'static {
        let live = self.0.clone();
        move || {
            if live.get() {
                callback();
            }
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

struct AnimatorState(Option<Typewriter>);

enum AnimatorAction {
    Step,
}

impl Reducible for AnimatorState {
    type Action = AnimatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AnimatorAction::Step => match &self.0 {
                Some(machine) => {
                    let mut next = machine.clone();
                    next.step();
                    Rc::new(AnimatorState(Some(next)))
                }
                None => self,
            },
        }
    }
}

/// Milliseconds of blinking observed so far.
struct CursorState(u64);

impl CursorState {
    fn visible(&self) -> bool {
        cursor_visible_at(self.0, CURSOR_TOGGLE_MS as u64)
    }
}

impl Reducible for CursorState {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(CursorState(self.0 + CURSOR_TOGGLE_MS as u64))
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub static_text: AttrValue,
    pub words: Vec<AttrValue>,
    #[prop_or(100)]
    pub speed: u32,
    #[prop_or(50)]
    pub erase_speed: u32,
    #[prop_or(1500)]
    pub delay: u32,
    #[prop_or(true)]
    pub show_cursor: bool,
    #[prop_or(AttrValue::Static("|"))]
    pub cursor_character: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Static prefix followed by a word that types itself out, waits, erases and
/// moves on to the next one. Configuration is read once at mount.
#[function_component(TypewriterEffect)]
pub fn typewriter_effect(props: &TypewriterProps) -> Html {
    let animator = {
        let words: Vec<String> = props.words.iter().map(|w| w.to_string()).collect();
        let timing = TypewriterTiming {
            type_ms: props.speed,
            erase_ms: props.erase_speed,
            pause_ms: props.delay,
        };
        use_reducer(move || AnimatorState(Typewriter::new(words, timing)))
    };
    let cursor = use_reducer(|| CursorState(0));

    let snapshot = animator
        .0
        .as_ref()
        .map(|machine| (machine.word_index(), machine.revealed(), machine.phase()));

    {
        let dispatcher = animator.dispatcher();
        let delay = animator.0.as_ref().map(Typewriter::next_delay);
        use_effect_with_deps(
            move |_| {
                let guard = TimerGuard::new();
                let step = guard.gate(move || dispatcher.dispatch(AnimatorAction::Step));
                let pending = delay.map(move |delay| Timeout::new(delay, step));
                move || drop((guard, pending))
            },
            snapshot,
        );
    }

    {
        let dispatcher = cursor.dispatcher();
        let animated = animator.0.is_some() && props.show_cursor;
        use_effect_with_deps(
            move |_| {
                let guard = TimerGuard::new();
                let toggle = guard.gate(move || dispatcher.dispatch(()));
                let blink = animated.then(move || Interval::new(CURSOR_TOGGLE_MS, toggle));
                move || drop((guard, blink))
            },
            (),
        );
    }

    let suffix = animator
        .0
        .as_ref()
        .map(|machine| machine.visible_text().to_string())
        .unwrap_or_default();

    html! {
        <div class={props.class.clone()}>
            { props.static_text.clone() }{" "}
            <span class="text-primary typewriter-text">{ suffix }</span>
            {
                if props.show_cursor && animator.0.is_some() {
                    html! {
                        <span
                            class="text-primary typewriter-cursor"
                            style={format!("opacity: {};", if cursor.visible() { 1 } else { 0 })}
                        >
                            { props.cursor_character.clone() }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Drives a machine on a simulated clock the way the component's
    /// timeouts do.
    struct Clock {
        machine: Typewriter,
        next_fire: u64,
    }

    impl Clock {
        fn start(machine: Typewriter) -> Self {
            let next_fire = machine.next_delay() as u64;
            Self { machine, next_fire }
        }

        fn advance_to(&mut self, t: u64) {
            while self.next_fire <= t {
                self.machine.step();
                self.next_fire += self.machine.next_delay() as u64;
            }
        }
    }

    fn timing(type_ms: u32, erase_ms: u32, pause_ms: u32) -> TypewriterTiming {
        TypewriterTiming { type_ms, erase_ms, pause_ms }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_word_list_has_no_animation() {
        assert!(Typewriter::new(Vec::new(), timing(100, 50, 200)).is_none());
    }

    #[test]
    fn starts_typing_first_word_with_nothing_revealed() {
        let machine = Typewriter::new(words(&["Outbound", "Pipeline"]), timing(100, 50, 200)).unwrap();
        assert_eq!(machine.phase(), Phase::Typing);
        assert_eq!(machine.word_index(), 0);
        assert_eq!(machine.revealed(), 0);
        assert_eq!(machine.visible_text(), "");
    }

    #[test]
    fn single_word_types_holds_and_erases_on_schedule() {
        let machine = Typewriter::new(words(&["Outbound"]), timing(100, 50, 200)).unwrap();
        let mut clock = Clock::start(machine);

        clock.advance_to(799);
        assert_eq!(clock.machine.visible_text(), "Outboun");

        clock.advance_to(800);
        assert_eq!(clock.machine.visible_text(), "Outbound");
        assert_eq!(clock.machine.phase(), Phase::Paused);

        clock.advance_to(999);
        assert_eq!(clock.machine.visible_text(), "Outbound");

        clock.advance_to(1000);
        assert_eq!(clock.machine.phase(), Phase::Deleting);

        clock.advance_to(1399);
        assert_eq!(clock.machine.visible_text(), "O");

        clock.advance_to(1400);
        assert_eq!(clock.machine.visible_text(), "");
        assert_eq!(clock.machine.phase(), Phase::Typing);
        assert_eq!(clock.machine.word_index(), 0);

        clock.advance_to(1500);
        assert_eq!(clock.machine.visible_text(), "O");
    }

    #[test]
    fn full_cycle_moves_to_next_word_and_wraps() {
        let mut machine = Typewriter::new(words(&["ab", "c", "def"]), timing(10, 10, 10)).unwrap();
        let mut seen = vec![machine.word_index()];
        for _ in 0..3 {
            let start = machine.word_index();
            while machine.word_index() == start {
                machine.step();
            }
            seen.push(machine.word_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn visible_text_is_always_a_prefix_within_bounds() {
        let mut machine =
            Typewriter::new(words(&["Leads", "", "Meetings", "Pipeline"]), timing(1, 1, 1)).unwrap();
        for _ in 0..500 {
            let word = machine.current_word().to_string();
            let len = word.chars().count();
            assert!(machine.revealed() <= len);
            assert!(word.starts_with(machine.visible_text()));
            assert_eq!(machine.visible_text().chars().count(), machine.revealed());
            machine.step();
        }
    }

    #[test]
    fn multibyte_words_are_cut_on_char_boundaries() {
        let mut machine = Typewriter::new(words(&["Nousu 🚀 ok"]), timing(1, 1, 1)).unwrap();
        for _ in 0..7 {
            machine.step();
        }
        assert_eq!(machine.visible_text(), "Nousu 🚀");
    }

    #[test]
    fn delay_follows_phase() {
        let mut machine = Typewriter::new(words(&["a"]), timing(100, 50, 1500)).unwrap();
        assert_eq!(machine.next_delay(), 100);
        machine.step();
        assert_eq!(machine.phase(), Phase::Paused);
        assert_eq!(machine.next_delay(), 1500);
        machine.step();
        assert_eq!(machine.next_delay(), 50);
    }

    #[test]
    fn cursor_flips_every_toggle_interval() {
        let toggle = CURSOR_TOGGLE_MS as u64;
        assert!(cursor_visible_at(0, toggle));
        for t in (0..5000).step_by(7) {
            assert_ne!(cursor_visible_at(t, toggle), cursor_visible_at(t + toggle, toggle));
        }
    }

    fn gated_machine(machine: Typewriter) -> (Rc<RefCell<Typewriter>>, TimerGuard, impl FnMut()) {
        let shared = Rc::new(RefCell::new(machine));
        let guard = TimerGuard::new();
        let fire = {
            let shared = shared.clone();
            guard.gate(move || shared.borrow_mut().step())
        };
        (shared, guard, fire)
    }

    #[test]
    fn dropped_guard_stops_steps_while_typing() {
        let machine = Typewriter::new(words(&["Outbound"]), timing(100, 50, 200)).unwrap();
        let (shared, guard, mut fire) = gated_machine(machine);
        fire();
        fire();
        fire();
        assert_eq!(shared.borrow().visible_text(), "Out");

        drop(guard);
        let before = shared.borrow().clone();
        for _ in 0..20 {
            fire();
        }
        assert_eq!(*shared.borrow(), before);
    }

    #[test]
    fn dropped_guard_stops_steps_while_paused() {
        let machine = Typewriter::new(words(&["ab"]), timing(100, 50, 200)).unwrap();
        let (shared, guard, mut fire) = gated_machine(machine);
        fire();
        fire();
        assert_eq!(shared.borrow().phase(), Phase::Paused);

        drop(guard);
        fire();
        assert_eq!(shared.borrow().phase(), Phase::Paused);
        assert_eq!(shared.borrow().visible_text(), "ab");
    }
}
