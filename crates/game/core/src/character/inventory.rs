//! Item storage for characters.

use std::collections::BTreeMap;

use crate::env::ItemId;

/// Item quantities keyed by id. Empty stacks are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<ItemId, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ItemId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let stack = self.items.entry(id).or_insert(0);
        *stack = stack.saturating_add(quantity);
    }

    /// Removes `quantity` of `id`. Returns false, leaving the stack untouched,
    /// when fewer are held.
    pub fn remove(&mut self, id: ItemId, quantity: u32) -> bool {
        let Some(stack) = self.items.get_mut(&id) else {
            return false;
        };
        if *stack < quantity {
            return false;
        }
        *stack -= quantity;
        if *stack == 0 {
            self.items.remove(&id);
        }
        true
    }

    pub fn quantity(&self, id: ItemId) -> u32 {
        self.items.get(&id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.quantity(id) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.items.iter().map(|(id, quantity)| (*id, *quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_and_removes() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(1), 2);
        inventory.add(ItemId(1), 3);
        assert_eq!(inventory.quantity(ItemId(1)), 5);

        assert!(!inventory.remove(ItemId(1), 6));
        assert!(inventory.remove(ItemId(1), 5));
        assert!(!inventory.contains(ItemId(1)));
        assert!(inventory.is_empty());
    }
}
