//! Reactive numeric attributes.
//!
//! An [`Attribute`] is a shared handle to a named, clamped value with a list of
//! additive modifiers and three events (value-changed, max-reached,
//! min-reached). Four variants share the handle type:
//!
//! | Kind           | Base value                     | Maximum                         |
//! |----------------|--------------------------------|---------------------------------|
//! | `Primary`      | settable                       | fixed bound                     |
//! | `Secondary`    | `formula(inputs)`              | fixed bound                     |
//! | `Volume`       | settable current amount        | `formula(inputs)`, clamped      |
//! | `SimpleVolume` | settable current amount        | settable bound                  |
//!
//! The effective value is always `clamp(base + Σ active modifiers, min, max)`.
//! Expired modifiers are dropped by the read that first observes them.
//!
//! Derived kinds subscribe to the value-changed event of every input. When an
//! input changes, the derived attribute re-raises its own value-changed event
//! (a volume also re-derives its maximum first), so changes propagate through
//! the dependency graph eagerly. Subscriptions hold weak references: dropping a
//! derived attribute detaches it from its inputs.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::StatError;
use super::formula::Formula;
use super::modifier::{AttributeModifier, ModifierId};
use crate::clock::Clock;
use crate::event::{Publisher, SubscriptionId};

/// Attribute variant, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum AttributeKind {
    Primary,
    Secondary,
    Volume,
    SimpleVolume,
}

impl AttributeKind {
    pub fn is_derived(self) -> bool {
        matches!(self, Self::Secondary | Self::Volume)
    }
}

/// Payload of every attribute event.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeEvent {
    pub name: Rc<str>,
    pub value: f32,
}

struct Derivation {
    inputs: Vec<Attribute>,
    formula: Formula,
    subscriptions: Vec<SubscriptionId>,
}

impl Derivation {
    fn detach(&self) {
        for (input, id) in self.inputs.iter().zip(&self.subscriptions) {
            input.0.value_changed.unsubscribe(*id);
        }
    }
}

struct AttributeData {
    base_value: f32,
    min_value: f32,
    max_value: f32,
    /// Ceiling for a volume's derived maximum; equals `max_value` otherwise.
    max_limit: f32,
    modifiers: Vec<AttributeModifier>,
    derivation: Option<Derivation>,
}

struct AttributeInner {
    name: Rc<str>,
    kind: AttributeKind,
    clock: Clock,
    data: RefCell<AttributeData>,
    value_changed: Publisher<AttributeEvent>,
    max_reached: Publisher<AttributeEvent>,
    min_reached: Publisher<AttributeEvent>,
}

impl Drop for AttributeInner {
    fn drop(&mut self) {
        if let Some(derivation) = self.data.get_mut().derivation.take() {
            derivation.detach();
        }
    }
}

/// Shared handle to a reactive attribute. Clones refer to the same attribute.
#[derive(Clone)]
pub struct Attribute(Rc<AttributeInner>);

impl Attribute {
    pub fn builder(name: impl Into<String>) -> AttributeBuilder {
        AttributeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> AttributeKind {
        self.0.kind
    }

    /// Returns true if both handles refer to the same attribute.
    pub fn ptr_eq(&self, other: &Attribute) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn min_value(&self) -> f32 {
        self.0.data.borrow().min_value
    }

    /// Upper clamp bound. For a volume this re-derives the maximum from its inputs.
    pub fn max_value(&self) -> f32 {
        match self.0.kind {
            AttributeKind::Volume => self.refresh_volume_max(),
            _ => self.0.data.borrow().max_value,
        }
    }

    /// Stored base value (the current amount for volumes), without modifiers.
    pub fn base_value(&self) -> f32 {
        self.0.data.borrow().base_value
    }

    /// Effective value: `clamp(base + Σ active modifiers, min, max)`.
    ///
    /// Purges expired modifiers as a side effect.
    pub fn value(&self) -> f32 {
        let bonus = self.active_bonus();
        let base = match self.0.kind {
            AttributeKind::Secondary => self
                .derived_output()
                .unwrap_or_else(|| self.base_value()),
            _ => self.base_value(),
        };
        clamp(base + bonus, self.min_value(), self.max_value())
    }

    /// Clamps `value` into bounds and stores it as the base value.
    ///
    /// Raises value-changed, then max-reached / min-reached when the stored
    /// value sits on a bound. A secondary attribute stores the value but keeps
    /// reporting its formula, so no events are raised for it.
    pub fn set_value(&self, value: f32) {
        let min = self.min_value();
        let max = match self.0.kind {
            AttributeKind::Volume => self.rederive_max().0,
            _ => self.0.data.borrow().max_value,
        };
        let stored = clamp(value, min, max);
        self.0.data.borrow_mut().base_value = stored;

        if self.0.kind == AttributeKind::Secondary {
            return;
        }

        self.emit_value_changed();
        if stored >= max {
            self.0.max_reached.emit(&self.event(stored));
        }
        if stored <= min {
            self.0.min_reached.emit(&self.event(stored));
        }
    }

    /// Resets to the worst case for counters (minimum) or refills volumes (maximum).
    pub fn reset(&self) {
        match self.0.kind {
            AttributeKind::Volume => self.set_value(self.max_value()),
            _ => self.set_value(self.min_value()),
        }
    }

    /// Activates `modifier` against the current clock time and attaches it.
    pub fn add_modifier(&self, mut modifier: AttributeModifier) -> ModifierId {
        modifier.activate(&self.0.clock);
        let id = modifier.id();
        self.0.data.borrow_mut().modifiers.push(modifier);
        self.emit_value_changed();
        id
    }

    /// Detaches a modifier. Returns false if it was not attached (or already expired).
    pub fn remove_modifier(&self, id: ModifierId) -> bool {
        let removed = {
            let mut data = self.0.data.borrow_mut();
            let before = data.modifiers.len();
            data.modifiers.retain(|modifier| modifier.id() != id);
            data.modifiers.len() != before
        };
        if removed {
            self.emit_value_changed();
        }
        removed
    }

    /// Number of modifiers still active at the current time.
    pub fn modifier_count(&self) -> usize {
        let now = self.0.clock.time();
        let mut data = self.0.data.borrow_mut();
        data.modifiers.retain(|modifier| modifier.is_active_at(now));
        data.modifiers.len()
    }

    /// Sets the maximum of a simple volume.
    ///
    /// The stored current amount is clamped down if it exceeds the new maximum.
    pub fn set_max_value(&self, max: f32) -> Result<(), StatError> {
        if self.0.kind != AttributeKind::SimpleVolume {
            return Err(StatError::MaxNotSettable {
                attribute: self.name().to_owned(),
                kind: self.0.kind,
            });
        }

        {
            let mut data = self.0.data.borrow_mut();
            let max = max.max(data.min_value);
            data.max_value = max;
            data.max_limit = max;
            if data.base_value > max {
                data.base_value = max;
            }
        }
        self.emit_value_changed();
        Ok(())
    }

    /// Input attributes of a derived attribute, in formula order.
    pub fn inputs(&self) -> Vec<Attribute> {
        self.0
            .data
            .borrow()
            .derivation
            .as_ref()
            .map(|derivation| derivation.inputs.clone())
            .unwrap_or_default()
    }

    /// Replaces the inputs of a derived attribute wholesale.
    ///
    /// Unsubscribes from the previous inputs, subscribes to the new ones and
    /// propagates the re-derived value.
    pub fn set_inputs(&self, inputs: Vec<Attribute>) -> Result<(), StatError> {
        if !self.0.kind.is_derived() {
            return Err(StatError::NotDerived(self.name().to_owned()));
        }
        if inputs.iter().any(|input| input.ptr_eq(self)) {
            return Err(StatError::SelfDependency(self.name().to_owned()));
        }

        {
            let mut data = self.0.data.borrow_mut();
            if let Some(derivation) = data.derivation.as_mut() {
                derivation.detach();
                derivation.inputs = inputs;
                derivation.subscriptions.clear();
            }
        }
        self.subscribe_inputs();
        self.propagate();
        Ok(())
    }

    pub fn value_changed(&self) -> &Publisher<AttributeEvent> {
        &self.0.value_changed
    }

    pub fn max_reached(&self) -> &Publisher<AttributeEvent> {
        &self.0.max_reached
    }

    pub fn min_reached(&self) -> &Publisher<AttributeEvent> {
        &self.0.min_reached
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn event(&self, value: f32) -> AttributeEvent {
        AttributeEvent {
            name: Rc::clone(&self.0.name),
            value,
        }
    }

    fn emit_value_changed(&self) {
        let event = self.event(self.value());
        self.0.value_changed.emit(&event);
    }

    fn active_bonus(&self) -> f32 {
        let now = self.0.clock.time();
        let mut data = self.0.data.borrow_mut();
        data.modifiers.retain(|modifier| modifier.is_active_at(now));
        data.modifiers.iter().map(AttributeModifier::value).sum()
    }

    fn derived_output(&self) -> Option<f32> {
        let (inputs, formula) = {
            let data = self.0.data.borrow();
            let derivation = data.derivation.as_ref()?;
            (derivation.inputs.clone(), derivation.formula)
        };
        let values: Vec<f32> = inputs.iter().map(Attribute::value).collect();
        Some(formula(&values))
    }

    /// Re-derives a volume's maximum and clamps the stored current amount to it.
    ///
    /// Raises value-changed when the current amount was cut down, which covers
    /// a maximum that shrank because an input modifier expired.
    fn refresh_volume_max(&self) -> f32 {
        let (max, clamped) = self.rederive_max();
        if clamped {
            self.emit_value_changed();
        }
        max
    }

    /// Silent part of [`refresh_volume_max`](Self::refresh_volume_max).
    /// Returns the new maximum and whether the current amount was clamped.
    fn rederive_max(&self) -> (f32, bool) {
        let output = self.derived_output();
        let mut data = self.0.data.borrow_mut();
        let derived = output.unwrap_or(data.max_value);
        let max = clamp(derived, data.min_value, data.max_limit);
        data.max_value = max;
        let clamped = data.base_value > max;
        if clamped {
            data.base_value = max;
        }
        (max, clamped)
    }

    fn subscribe_inputs(&self) {
        let inputs = self.inputs();
        let weak: Weak<AttributeInner> = Rc::downgrade(&self.0);

        let subscriptions = inputs
            .iter()
            .map(|input| {
                let weak = weak.clone();
                input.0.value_changed.subscribe(move |_| {
                    if let Some(inner) = weak.upgrade() {
                        Attribute(inner).propagate();
                    }
                })
            })
            .collect();

        if let Some(derivation) = self.0.data.borrow_mut().derivation.as_mut() {
            derivation.subscriptions = subscriptions;
        }
    }

    fn propagate(&self) {
        if self.0.kind == AttributeKind::Volume {
            self.rederive_max();
        }
        self.emit_value_changed();
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.data.borrow();
        f.debug_struct("Attribute")
            .field("name", &self.0.name)
            .field("kind", &self.0.kind)
            .field("base_value", &data.base_value)
            .field("min_value", &data.min_value)
            .field("max_value", &data.max_value)
            .field("modifiers", &data.modifiers.len())
            .finish()
    }
}

/// NaN-tolerant clamp: NaN collapses to `min`.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent constructor for every attribute kind.
///
/// ```
/// # use arpg_core::{Attribute, Clock};
/// let clock = Clock::new();
/// let body = Attribute::builder("Body").bounds(0.0, 999.0).value(10.0).primary(&clock);
/// assert_eq!(body.value(), 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct AttributeBuilder {
    name: String,
    min: f32,
    max: f32,
    value: Option<f32>,
}

impl AttributeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: 0.0,
            max: f32::MAX,
            value: None,
        }
    }

    /// Clamp bounds. For volumes `max` caps the derived maximum.
    pub fn bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min.min(max);
        self.max = max.max(min);
        self
    }

    /// Initial base value (initial current amount for volumes).
    pub fn value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    /// Free-standing settable value. Defaults to the minimum.
    pub fn primary(self, clock: &Clock) -> Attribute {
        let base = clamp(self.value.unwrap_or(self.min), self.min, self.max);
        self.build(AttributeKind::Primary, clock, base, None)
    }

    /// Settable current amount below a settable maximum. Starts full by default.
    pub fn simple_volume(self, clock: &Clock) -> Attribute {
        let base = clamp(self.value.unwrap_or(self.max), self.min, self.max);
        self.build(AttributeKind::SimpleVolume, clock, base, None)
    }

    /// Value derived by `formula` from `inputs`.
    pub fn secondary(self, clock: &Clock, inputs: Vec<Attribute>, formula: Formula) -> Attribute {
        let base = clamp(self.value.unwrap_or(self.min), self.min, self.max);
        let attribute = self.build(
            AttributeKind::Secondary,
            clock,
            base,
            Some(Derivation {
                inputs,
                formula,
                subscriptions: Vec::new(),
            }),
        );
        attribute.subscribe_inputs();
        attribute
    }

    /// Depletable current amount below a maximum derived by `formula` from `inputs`.
    /// Starts full by default.
    pub fn volume(self, clock: &Clock, inputs: Vec<Attribute>, formula: Formula) -> Attribute {
        let base = self
            .value
            .map_or(self.max, |value| clamp(value, self.min, self.max));
        let attribute = self.build(
            AttributeKind::Volume,
            clock,
            base,
            Some(Derivation {
                inputs,
                formula,
                subscriptions: Vec::new(),
            }),
        );
        attribute.rederive_max();
        attribute.subscribe_inputs();
        attribute
    }

    fn build(
        self,
        kind: AttributeKind,
        clock: &Clock,
        base_value: f32,
        derivation: Option<Derivation>,
    ) -> Attribute {
        Attribute(Rc::new(AttributeInner {
            name: Rc::from(self.name),
            kind,
            clock: clock.clone(),
            data: RefCell::new(AttributeData {
                base_value,
                min_value: self.min,
                max_value: self.max,
                max_limit: self.max,
                modifiers: Vec::new(),
                derivation,
            }),
            value_changed: Publisher::new(),
            max_reached: Publisher::new(),
            min_reached: Publisher::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::formula;
    use std::cell::Cell;

    fn counter(publisher: &Publisher<AttributeEvent>) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        publisher.subscribe(move |_| handle.set(handle.get() + 1));
        count
    }

    fn body(clock: &Clock, value: f32) -> Attribute {
        Attribute::builder("Body")
            .bounds(0.0, 999.0)
            .value(value)
            .primary(clock)
    }

    #[test]
    fn set_value_clamps_into_bounds() {
        let clock = Clock::new();
        let attribute = body(&clock, 10.0);

        for (input, expected) in [(-5.0, 0.0), (0.0, 0.0), (42.5, 42.5), (1500.0, 999.0)] {
            attribute.set_value(input);
            assert_eq!(attribute.value(), expected, "set_value({input})");
        }
    }

    #[test]
    fn set_value_raises_bound_events() {
        let clock = Clock::new();
        let attribute = body(&clock, 10.0);
        let changed = counter(attribute.value_changed());
        let maxed = counter(attribute.max_reached());
        let floored = counter(attribute.min_reached());

        attribute.set_value(50.0);
        attribute.set_value(5000.0);
        attribute.set_value(-1.0);

        assert_eq!(changed.get(), 3);
        assert_eq!(maxed.get(), 1);
        assert_eq!(floored.get(), 1);
    }

    #[test]
    fn time_based_modifier_expires_lazily() {
        let clock = Clock::new();
        let attribute = body(&clock, 10.0);

        attribute.add_modifier(AttributeModifier::time_based("bless", 10.0, 10.0));
        assert_eq!(attribute.value(), 20.0);

        clock.set_time(9.99).unwrap();
        assert_eq!(attribute.value(), 20.0);
        assert_eq!(attribute.modifier_count(), 1);

        clock.set_time(10.0).unwrap();
        assert_eq!(attribute.value(), 10.0);
        assert_eq!(attribute.modifier_count(), 0);
    }

    #[test]
    fn remove_modifier_by_identity() {
        let clock = Clock::new();
        let attribute = body(&clock, 10.0);
        let first = attribute.add_modifier(AttributeModifier::permanent("a", 3.0));
        attribute.add_modifier(AttributeModifier::permanent("b", 4.0));
        assert_eq!(attribute.value(), 17.0);

        let changed = counter(attribute.value_changed());
        assert!(attribute.remove_modifier(first));
        assert!(!attribute.remove_modifier(first));
        assert_eq!(attribute.value(), 14.0);
        assert_eq!(changed.get(), 1);
    }

    #[test]
    fn modifiers_respect_bounds() {
        let clock = Clock::new();
        let attribute = body(&clock, 990.0);
        attribute.add_modifier(AttributeModifier::permanent("giant", 50.0));
        assert_eq!(attribute.value(), 999.0);
    }

    #[test]
    fn reset_sends_primary_to_minimum() {
        let clock = Clock::new();
        let attribute = Attribute::builder("Experience")
            .bounds(5.0, 100.0)
            .value(50.0)
            .primary(&clock);
        attribute.reset();
        assert_eq!(attribute.value(), 5.0);
    }

    #[test]
    fn secondary_follows_inputs_and_notifies() {
        let clock = Clock::new();
        let experience = Attribute::builder("Experience")
            .bounds(0.0, 1_000_000.0)
            .primary(&clock);
        let level = Attribute::builder("Level").bounds(0.0, 99.0).secondary(
            &clock,
            vec![experience.clone()],
            formula::level,
        );
        let notified = counter(level.value_changed());

        assert_eq!(level.value(), 0.0);
        experience.set_value(100.0);
        assert_eq!(level.value(), 1.0);
        experience.set_value(9801.0);
        assert_eq!(level.value(), 9.0);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn secondary_ignores_direct_writes() {
        let clock = Clock::new();
        let experience = Attribute::builder("Experience")
            .bounds(0.0, 1_000_000.0)
            .value(400.0)
            .primary(&clock);
        let level = Attribute::builder("Level").bounds(0.0, 99.0).secondary(
            &clock,
            vec![experience],
            formula::level,
        );

        level.set_value(50.0);
        assert_eq!(level.value(), 2.0);
    }

    #[test]
    fn secondary_clamps_formula_output() {
        let clock = Clock::new();
        let experience = Attribute::builder("Experience")
            .bounds(0.0, f32::MAX)
            .value(1.0e9)
            .primary(&clock);
        let level = Attribute::builder("Level").bounds(0.0, 99.0).secondary(
            &clock,
            vec![experience],
            formula::level,
        );
        assert_eq!(level.value(), 99.0);
    }

    fn life_fixture(clock: &Clock) -> (Attribute, Attribute, Attribute) {
        let level = Attribute::builder("Level").bounds(0.0, 99.0).primary(clock);
        let body = body(clock, 0.0);
        let life = Attribute::builder("Life").bounds(0.0, 999.0).volume(
            clock,
            vec![level.clone(), body.clone()],
            formula::volume_max,
        );
        (level, body, life)
    }

    #[test]
    fn volume_starts_full_and_max_follows_inputs() {
        let clock = Clock::new();
        let (_level, body, life) = life_fixture(&clock);
        assert_eq!(life.max_value(), 20.0);
        assert_eq!(life.value(), 20.0);

        body.set_value(10.0);
        assert_eq!(life.max_value(), 23.0);
        assert_eq!(life.value(), 20.0);
    }

    #[test]
    fn volume_depletion_keeps_maximum() {
        let clock = Clock::new();
        let (_level, _body, life) = life_fixture(&clock);
        life.set_value(5.0);
        assert_eq!(life.value(), 5.0);
        assert_eq!(life.max_value(), 20.0);
    }

    #[test]
    fn volume_current_is_clamped_when_maximum_shrinks() {
        let clock = Clock::new();
        let (level, _body, life) = life_fixture(&clock);
        level.set_value(2.0);
        life.reset();
        assert_eq!(life.value(), 30.0);

        level.set_value(0.0);
        assert_eq!(life.max_value(), 20.0);
        assert_eq!(life.value(), 20.0);
        assert_eq!(life.base_value(), 20.0);

        // Growing the maximum again does not restore the lost amount.
        level.set_value(2.0);
        assert_eq!(life.max_value(), 30.0);
        assert_eq!(life.value(), 20.0);
    }

    #[test]
    fn volume_clamp_after_input_modifier_expires_notifies() {
        let clock = Clock::new();
        let (_level, body, life) = life_fixture(&clock);
        body.add_modifier(AttributeModifier::time_based("vigor", 30.0, 5.0));
        life.reset();
        assert_eq!(life.value(), 30.0);

        let notified = counter(life.value_changed());
        clock.set_time(5.0).unwrap();
        assert_eq!(life.value(), 20.0);
        assert_eq!(life.max_value(), 20.0);
        assert_eq!(life.base_value(), 20.0);
        assert_eq!(notified.get(), 1);

        // Nothing left to clamp.
        assert_eq!(life.value(), 20.0);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn volume_reset_refills() {
        let clock = Clock::new();
        let (_level, body, life) = life_fixture(&clock);
        body.set_value(30.0);
        life.set_value(1.0);
        life.reset();
        assert_eq!(life.value(), 30.0);
    }

    #[test]
    fn volume_propagates_input_changes() {
        let clock = Clock::new();
        let (_level, body, life) = life_fixture(&clock);
        let notified = counter(life.value_changed());
        body.set_value(12.0);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn set_inputs_resubscribes() {
        let clock = Clock::new();
        let (level, old_body, life) = life_fixture(&clock);
        let new_body = body(&clock, 30.0);

        life.set_inputs(vec![level, new_body.clone()]).unwrap();
        assert_eq!(life.max_value(), 30.0);

        let notified = counter(life.value_changed());
        old_body.set_value(300.0);
        assert_eq!(notified.get(), 0);
        assert_eq!(old_body.value_changed().len(), 0);

        new_body.set_value(60.0);
        assert_eq!(notified.get(), 1);
        assert_eq!(life.max_value(), 40.0);
    }

    #[test]
    fn set_inputs_rejects_primary_and_self() {
        let clock = Clock::new();
        let (level, _body, life) = life_fixture(&clock);
        assert!(matches!(
            level.set_inputs(vec![]),
            Err(StatError::NotDerived(_))
        ));
        assert!(matches!(
            life.set_inputs(vec![life.clone()]),
            Err(StatError::SelfDependency(_))
        ));
    }

    #[test]
    fn dropping_derived_attribute_detaches_it() {
        let clock = Clock::new();
        let (level, body, life) = life_fixture(&clock);
        assert_eq!(body.value_changed().len(), 1);
        drop(life);
        assert_eq!(body.value_changed().len(), 0);
        assert_eq!(level.value_changed().len(), 0);
    }

    #[test]
    fn simple_volume_has_settable_maximum() {
        let clock = Clock::new();
        let stamina = Attribute::builder("Stamina")
            .bounds(0.0, 50.0)
            .simple_volume(&clock);
        assert_eq!(stamina.value(), 50.0);

        stamina.set_max_value(30.0).unwrap();
        assert_eq!(stamina.max_value(), 30.0);
        assert_eq!(stamina.value(), 30.0);

        stamina.set_value(10.0);
        stamina.reset();
        assert_eq!(stamina.value(), 0.0);
    }

    #[test]
    fn set_max_value_rejected_for_other_kinds() {
        let clock = Clock::new();
        let attribute = body(&clock, 1.0);
        assert!(matches!(
            attribute.set_max_value(5.0),
            Err(StatError::MaxNotSettable {
                kind: AttributeKind::Primary,
                ..
            })
        ));
    }
}
