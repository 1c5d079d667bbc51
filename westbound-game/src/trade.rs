//! Trading post: a fixed price list validated against cash on hand.

use serde::{Deserialize, Serialize};

use crate::resources::Resources;

/// Goods the trading post stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeGood {
    Food,
    Ammunition,
    Clothing,
    WagonPart,
    Medicine,
}

impl TradeGood {
    pub const ALL: &'static [Self] = &[
        Self::Food,
        Self::Ammunition,
        Self::Clothing,
        Self::WagonPart,
        Self::Medicine,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Ammunition => "ammunition",
            Self::Clothing => "clothing",
            Self::WagonPart => "wagon_part",
            Self::Medicine => "medicine",
        }
    }

    /// Price in dollars for one lot.
    #[must_use]
    pub const fn price(self) -> i32 {
        match self {
            Self::Food => 20,
            Self::Ammunition => 10,
            Self::Clothing => 15,
            Self::WagonPart => 35,
            Self::Medicine => 25,
        }
    }

    /// Units granted per lot.
    #[must_use]
    pub const fn quantity(self) -> i32 {
        match self {
            Self::Food => 50,
            Self::Ammunition => 20,
            Self::Clothing | Self::WagonPart | Self::Medicine => 1,
        }
    }

    /// Human description of one lot, for purchase notices.
    #[must_use]
    pub const fn lot_label(self) -> &'static str {
        match self {
            Self::Food => "50 pounds of food",
            Self::Ammunition => "20 bullets",
            Self::Clothing => "1 set of clothing",
            Self::WagonPart => "1 wagon part",
            Self::Medicine => "1 medicine kit",
        }
    }

    /// Map a menu option (1-5) onto a good.
    #[must_use]
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(Self::Food),
            2 => Some(Self::Ammunition),
            3 => Some(Self::Clothing),
            4 => Some(Self::WagonPart),
            5 => Some(Self::Medicine),
            _ => None,
        }
    }
}

/// Result of one purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Bought { good: TradeGood },
    InsufficientFunds { good: TradeGood },
}

/// Buy one lot of `good`, validating money before any mutation. On refusal
/// the ledger is untouched.
pub fn purchase(resources: &mut Resources, good: TradeGood) -> PurchaseOutcome {
    if !resources.spend(good.price()) {
        return PurchaseOutcome::InsufficientFunds { good };
    }
    match good {
        TradeGood::Food => resources.food += good.quantity(),
        TradeGood::Ammunition => resources.ammunition += good.quantity(),
        TradeGood::Clothing => resources.clothing += good.quantity(),
        TradeGood::WagonPart => resources.wagon_parts += good.quantity(),
        TradeGood::Medicine => resources.medicines += good.quantity(),
    }
    PurchaseOutcome::Bought { good }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_list_matches_the_post() {
        let expected = [
            (TradeGood::Food, 20, 50),
            (TradeGood::Ammunition, 10, 20),
            (TradeGood::Clothing, 15, 1),
            (TradeGood::WagonPart, 35, 1),
            (TradeGood::Medicine, 25, 1),
        ];
        for (good, price, quantity) in expected {
            assert_eq!(good.price(), price, "{}", good.key());
            assert_eq!(good.quantity(), quantity, "{}", good.key());
        }
    }

    #[test]
    fn short_purse_rejects_without_mutation() {
        let mut resources = Resources {
            money: 15,
            ..Resources::default()
        };
        let outcome = purchase(&mut resources, TradeGood::Food);
        assert_eq!(
            outcome,
            PurchaseOutcome::InsufficientFunds {
                good: TradeGood::Food
            }
        );
        assert_eq!(resources.money, 15);
        assert_eq!(resources.food, 0);
    }

    #[test]
    fn exact_change_buys_the_lot() {
        let mut resources = Resources {
            money: 20,
            ..Resources::default()
        };
        let outcome = purchase(&mut resources, TradeGood::Food);
        assert_eq!(
            outcome,
            PurchaseOutcome::Bought {
                good: TradeGood::Food
            }
        );
        assert_eq!(resources.money, 0);
        assert_eq!(resources.food, 50);
    }

    #[test]
    fn each_good_credits_its_own_counter() {
        let mut resources = Resources {
            money: 500,
            ..Resources::default()
        };
        for &good in TradeGood::ALL {
            purchase(&mut resources, good);
        }
        assert_eq!(resources.food, 50);
        assert_eq!(resources.ammunition, 20);
        assert_eq!(resources.clothing, 1);
        assert_eq!(resources.wagon_parts, 1);
        assert_eq!(resources.medicines, 1);
        assert_eq!(resources.money, 500 - 20 - 10 - 15 - 35 - 25);
    }

    #[test]
    fn menu_options_map_to_goods() {
        assert_eq!(TradeGood::from_option(1), Some(TradeGood::Food));
        assert_eq!(TradeGood::from_option(5), Some(TradeGood::Medicine));
        assert_eq!(TradeGood::from_option(6), None);
    }
}
