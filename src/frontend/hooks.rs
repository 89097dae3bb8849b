use gloo::{
    events::EventListener,
    render::{request_animation_frame, AnimationFrame},
    timers::callback::{Interval, Timeout},
};
use std::{cell::RefCell, rc::Rc, time::Duration};
use web_sys::window;
use yew::prelude::*;

use super::dom;
use crate::behaviors::{
    carousel::{Carousel, CarouselAction},
    dropdown::{Dropdown, DropdownEvent},
    scroll_spy::{FrameGate, ScrollObservation, ScrollSpy},
    typewriter::{OneShot, TickOutcome, Typewriter, TypewriterPhase, TypewriterTiming},
};
use crate::content::SectionLink;

impl Reducible for ScrollSpy {
    type Action = ScrollObservation;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.observe(&action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

impl Reducible for Dropdown {
    type Action = DropdownEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Tracks the active section and header visibility. Scroll events are
/// coalesced so measuring happens at most once per animation frame.
#[hook]
pub fn use_scroll_spy(
    sections: &'static [SectionLink],
    hero_id: &'static str,
) -> UseReducerHandle<ScrollSpy> {
    let spy = use_reducer(|| ScrollSpy::new(sections.first().map(|s| s.id).unwrap_or_default()));

    {
        let dispatcher = spy.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(dom::measure_sections(sections, hero_id));

            let gate = Rc::new(RefCell::new(FrameGate::default()));
            let frame = Rc::new(RefCell::new(None::<AnimationFrame>));

            let listener = window().map(|win| {
                let frame = Rc::clone(&frame);
                EventListener::new(&win, "scroll", move |_| {
                    if !gate.borrow_mut().try_schedule() {
                        return;
                    }

                    let gate = Rc::clone(&gate);
                    let dispatcher = dispatcher.clone();
                    let handle = request_animation_frame(move |_| {
                        gate.borrow_mut().release();
                        dispatcher.dispatch(dom::measure_sections(sections, hero_id));
                    });
                    *frame.borrow_mut() = Some(handle);
                })
            });

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        });
    }

    spy
}

/// Dropdown state plus the document listeners that close it: clicks outside
/// `container` and any scroll.
#[hook]
pub fn use_dropdown(container: NodeRef) -> UseReducerHandle<Dropdown> {
    let menu = use_reducer(Dropdown::default);

    {
        let dispatcher = menu.dispatcher();
        use_effect_with(container, move |container| {
            let click = window().and_then(|w| w.document()).map(|document| {
                let container = container.clone();
                let dispatcher = dispatcher.clone();
                EventListener::new(&document, "click", move |event| {
                    let target = dom::classify_click(&container, event);
                    dispatcher.dispatch(DropdownEvent::Click(target));
                })
            });
            let scroll = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    dispatcher.dispatch(DropdownEvent::Scrolled);
                })
            });

            move || {
                drop(click);
                drop(scroll);
            }
        });
    }

    menu
}

/// Flips to true once `delay` has passed after mount.
#[hook]
pub fn use_delayed_flag(delay: Duration) -> bool {
    let flag = use_state(|| false);

    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(dom::millis(delay), move || flag.set(true));
            move || drop(timeout)
        });
    }

    *flag
}

#[derive(Default)]
struct RevealTimers {
    frame: Option<Timeout>,
    start: Option<Timeout>,
    ticker: Option<Interval>,
    reveal: Option<Timeout>,
}

impl RevealTimers {
    fn cancel_all(&mut self) {
        self.frame = None;
        self.start = None;
        self.ticker = None;
        self.reveal = None;
    }
}

#[derive(Clone)]
struct RevealDriver {
    machine: Rc<RefCell<Typewriter>>,
    timers: Rc<RefCell<RevealTimers>>,
    redraw: UseForceUpdateHandle,
    timing: TypewriterTiming,
}

impl RevealDriver {
    fn start(&self) {
        let frame = {
            let driver = self.clone();
            Timeout::new(dom::millis(self.timing.frame_delay), move || {
                driver.machine.borrow_mut().show_frame();
                driver.redraw.force_update();
            })
        };

        let start = {
            let driver = self.clone();
            Timeout::new(dom::millis(self.timing.initial_delay), move || {
                driver.machine.borrow_mut().begin();
                if driver.machine.borrow().phase() == TypewriterPhase::Typed {
                    driver.schedule_reveal();
                } else {
                    driver.start_ticker();
                }
            })
        };

        let mut timers = self.timers.borrow_mut();
        timers.frame = Some(frame);
        timers.start = Some(start);
    }

    fn start_ticker(&self) {
        let driver = self.clone();
        let ticker = Interval::new(dom::millis(self.timing.tick_interval), move || {
            let outcome = driver.machine.borrow_mut().tick();
            match outcome {
                TickOutcome::Typed => driver.redraw.force_update(),
                TickOutcome::Completed => {
                    driver.redraw.force_update();
                    let stopped = driver.timers.borrow_mut().ticker.take();
                    driver.schedule_reveal();
                    drop(stopped);
                }
                TickOutcome::Ignored => {}
            }
        });
        self.timers.borrow_mut().ticker = Some(ticker);
    }

    fn schedule_reveal(&self) {
        let driver = self.clone();
        let reveal = Timeout::new(dom::millis(self.timing.reveal_delay), move || {
            if driver.machine.borrow_mut().reveal() {
                driver.redraw.force_update();
            }
        });
        self.timers.borrow_mut().reveal = Some(reveal);
    }
}

/// Types `target` out once per mount, then flags the content as revealed.
/// Pending timers are cancelled when the component unmounts.
#[hook]
pub fn use_typewriter(target: &'static str, timing: TypewriterTiming) -> Typewriter {
    let machine = use_mut_ref(|| Typewriter::new(target));
    let latch = use_mut_ref(OneShot::default);
    let redraw = use_force_update();

    {
        let machine = Rc::clone(&machine);
        use_effect_with((), move |_| {
            let timers = Rc::new(RefCell::new(RevealTimers::default()));

            if latch.borrow_mut().fire() {
                RevealDriver {
                    machine,
                    timers: Rc::clone(&timers),
                    redraw,
                    timing,
                }
                .start();
            }

            move || timers.borrow_mut().cancel_all()
        });
    }

    let snapshot = machine.borrow().clone();
    snapshot
}
