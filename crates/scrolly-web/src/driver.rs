//! Connects scroll events and timeouts to the transition engine.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scrolly_core::ids::{SegmentId, StepNumber};
use scrolly_story::domain::document::DocumentStructure;
use scrolly_story::domain::step::StepRecord;
use scrolly_transition::application::engine::{EnteredStep, TransitionEngine};
use scrolly_transition::domain::schedule::TaskToken;

use crate::dom;
use crate::leaflet::LeafletBackend;
use crate::surface::DomSurface;
use crate::timers::TimerSet;

/// A rendered scrolly step, in the order the scroll library indexes them.
#[derive(Debug, Clone)]
pub(crate) struct ScrollyStep {
    pub(crate) number: StepNumber,
    pub(crate) segment: SegmentId,
    pub(crate) record: StepRecord,
}

/// The scrolly steps of `structure`, in document order.
pub(crate) fn scrolly_steps(structure: &DocumentStructure) -> Vec<ScrollyStep> {
    structure
        .scrolly_steps()
        .map(|(segment, placed)| ScrollyStep {
            number: placed.number,
            segment,
            record: placed.record.clone(),
        })
        .collect()
}

type PageEngine = TransitionEngine<DomSurface, LeafletBackend>;

/// Owns the engine for one page load.
///
/// The engine and the timers sit in separate cells: a timeout callback only
/// borrows the engine, and a step-entered callback borrows each in turn.
pub(crate) struct StepDriver {
    engine: RefCell<PageEngine>,
    timers: RefCell<TimerSet>,
    steps: Vec<ScrollyStep>,
}

impl StepDriver {
    pub(crate) fn new(engine: PageEngine, steps: Vec<ScrollyStep>) -> Rc<Self> {
        Rc::new(Self {
            engine: RefCell::new(engine),
            timers: RefCell::new(TimerSet::default()),
            steps,
        })
    }

    /// Handles the scroll library reporting step `index` as entered.
    pub(crate) fn step_entered(self: &Rc<Self>, index: usize) {
        let Some(step) = self.steps.get(index) else {
            dom::warn(&format!("ignoring unknown step index {index}"));
            return;
        };

        let scheduled = self.engine.borrow_mut().handle_step_enter(EnteredStep {
            number: step.number,
            segment: step.segment,
            record: &step.record,
        });

        let mut timers = self.timers.borrow_mut();
        {
            let engine = self.engine.borrow();
            timers.prune(|token| engine.context().is_pending(token));
        }
        for task in scheduled {
            let driver: Weak<Self> = Rc::downgrade(self);
            timers.schedule(task, move |token| {
                if let Some(driver) = driver.upgrade() {
                    driver.run_task(token);
                }
            });
        }
    }

    fn run_task(&self, token: TaskToken) {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.run_task(token);
        } else {
            dom::warn(&format!("engine busy, dropping {token}"));
        }
    }
}
