//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;
use qrpos_core::Money;

/// Returns the active configuration (store name, currency, storage).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Formats an amount for display, e.g. `฿1,180.00`.
pub fn format_price(config: &ConfigState, amount: Money) -> String {
    config.format_currency(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config() {
        let config = ConfigState::default();
        let returned = get_config(&config);
        assert_eq!(returned.store_name, config.store_name);
        assert_eq!(returned.currency_code, "THB");
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(format_price(&config, Money::from_major(45)), "฿45.00");
        assert_eq!(format_price(&config, Money::from_minor(123_456_789)), "฿1,234,567.89");
    }
}
