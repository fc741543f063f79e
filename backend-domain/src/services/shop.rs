// Reward shop rules

use chrono::{DateTime, Utc};

use crate::entities::{Character, Reward};
use crate::value_objects::Currency;
use crate::{DomainError, DomainResult};

/// Debits the character and takes one unit of stock. Both rows are left untouched
/// when any check fails. Returns the amount debited.
pub fn purchase(
    character: &mut Character,
    reward: &mut Reward,
    currency: Currency,
    cost: i64,
    now: DateTime<Utc>,
) -> DomainResult<i64> {
    if !reward.is_active {
        return Err(DomainError::Validation("reward is not available".to_string()));
    }
    if reward.guild_id != character.guild_id {
        return Err(DomainError::not_found("reward"));
    }
    let price = reward.price.amount(currency);
    if price <= 0 {
        return Err(DomainError::Validation(format!(
            "reward cannot be bought with {} coins",
            currency
        )));
    }
    if cost != price {
        return Err(DomainError::PriceMismatch {
            currency,
            expected: cost,
            actual: price,
        });
    }
    if matches!(reward.stock, Some(stock) if stock <= 0) {
        return Err(DomainError::OutOfStock);
    }
    let have = character.balance(currency);
    if have < price {
        return Err(DomainError::InsufficientFunds {
            currency,
            have,
            need: price,
        });
    }

    *character.balance_mut(currency) -= price;
    character.updated_at = now;
    if let Some(stock) = reward.stock.as_mut() {
        *stock -= 1;
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Price;
    use crate::services::progression::starting_character;
    use uuid::Uuid;

    fn reward(guild_id: Uuid, price: Price, stock: Option<i32>) -> Reward {
        Reward {
            id: Uuid::new_v4(),
            guild_id,
            name: "Extra screen time".to_string(),
            description: None,
            category: "privilege".to_string(),
            price,
            stock,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn purchase_debits_price_and_stock() {
        let guild_id = Uuid::new_v4();
        let mut character = starting_character(Uuid::new_v4(), guild_id, "Ada", Utc::now());
        let mut item = reward(guild_id, Price { bronze: 4, ..Price::default() }, Some(2));
        let paid = purchase(&mut character, &mut item, Currency::Bronze, 4, Utc::now())
            .expect("purchase");
        assert_eq!(paid, 4);
        assert_eq!(character.bronze_coins, 6);
        assert_eq!(item.stock, Some(1));
    }

    #[test]
    fn unlimited_stock_stays_unlimited() {
        let guild_id = Uuid::new_v4();
        let mut character = starting_character(Uuid::new_v4(), guild_id, "Ada", Utc::now());
        let mut item = reward(guild_id, Price { bronze: 1, ..Price::default() }, None);
        purchase(&mut character, &mut item, Currency::Bronze, 1, Utc::now()).expect("purchase");
        assert_eq!(item.stock, None);
    }

    #[test]
    fn insufficient_funds_leaves_rows_untouched() {
        let guild_id = Uuid::new_v4();
        let mut character = starting_character(Uuid::new_v4(), guild_id, "Ada", Utc::now());
        let mut item = reward(guild_id, Price { gold: 1, ..Price::default() }, Some(1));
        let err = purchase(&mut character, &mut item, Currency::Gold, 1, Utc::now())
            .expect_err("no gold");
        assert!(matches!(err, DomainError::InsufficientFunds { have: 0, need: 1, .. }));
        assert_eq!(item.stock, Some(1));
        assert_eq!(character.gold_coins, 0);
    }

    #[test]
    fn empty_stock_and_stale_price_are_rejected() {
        let guild_id = Uuid::new_v4();
        let mut character = starting_character(Uuid::new_v4(), guild_id, "Ada", Utc::now());
        let mut sold_out = reward(guild_id, Price { bronze: 1, ..Price::default() }, Some(0));
        assert!(matches!(
            purchase(&mut character, &mut sold_out, Currency::Bronze, 1, Utc::now()),
            Err(DomainError::OutOfStock)
        ));
        let mut repriced = reward(guild_id, Price { bronze: 3, ..Price::default() }, None);
        assert!(matches!(
            purchase(&mut character, &mut repriced, Currency::Bronze, 2, Utc::now()),
            Err(DomainError::PriceMismatch { actual: 3, .. })
        ));
        assert_eq!(character.bronze_coins, 10);
    }

    #[test]
    fn currency_without_price_is_rejected() {
        let guild_id = Uuid::new_v4();
        let mut character = starting_character(Uuid::new_v4(), guild_id, "Ada", Utc::now());
        let mut item = reward(guild_id, Price { bronze: 1, ..Price::default() }, None);
        assert!(matches!(
            purchase(&mut character, &mut item, Currency::Silver, 0, Utc::now()),
            Err(DomainError::Validation(_))
        ));
    }
}
