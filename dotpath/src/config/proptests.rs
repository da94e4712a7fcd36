//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{AccessorConfig, Delivery};
use proptest::prelude::*;

fn delivery_strategy() -> impl Strategy<Value = Delivery> {
    prop_oneof![Just(Delivery::Immediate), Just(Delivery::Deferred)]
}

fn config_strategy() -> impl Strategy<Value = AccessorConfig> {
    (
        prop::option::of("[./:|]{1,3}"),
        prop::option::of(any::<bool>()),
        prop::option::of(delivery_strategy()),
    )
        .prop_map(|(delimiter, upsert, delivery)| AccessorConfig {
            delimiter,
            upsert,
            delivery,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Fields set in the higher layer always win; unset fields fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.delimiter, high.delimiter.or(low.delimiter));
        prop_assert_eq!(merged.upsert, high.upsert.or(low.upsert));
        prop_assert_eq!(merged.delivery, high.delivery.or(low.delivery));
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }
}
