//! Unit tests for bo-core primitives.

#[cfg(test)]
mod ids {
    use crate::HandlerKey;

    #[test]
    fn ordering_and_next() {
        assert!(HandlerKey(0) < HandlerKey(1));
        assert_eq!(HandlerKey(4).next(), HandlerKey(5));
        assert_eq!(HandlerKey(9).index(), 9);
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(HandlerKey::default(), HandlerKey::INVALID);
        assert_eq!(HandlerKey::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(HandlerKey(7).to_string(), "HandlerKey(7)");
    }
}

#[cfg(test)]
mod behavior {
    use crate::BehaviorType;

    struct Timestamp;

    #[test]
    fn short_name_strips_path() {
        let ty = BehaviorType::new("app::behaviors::Timestamp");
        assert_eq!(ty.qualified_name(), "app::behaviors::Timestamp");
        assert_eq!(ty.short_name(), "Timestamp");
    }

    #[test]
    fn short_name_handles_foreign_separators() {
        assert_eq!(BehaviorType::new("Model\\Behavior\\Tree").short_name(), "Tree");
        assert_eq!(BehaviorType::new("model.behavior.Sluggable").short_name(), "Sluggable");
        assert_eq!(BehaviorType::new("Plain").short_name(), "Plain");
    }

    #[test]
    fn of_uses_rust_type_path() {
        let ty = BehaviorType::of::<Timestamp>();
        assert!(ty.qualified_name().ends_with("Timestamp"));
        assert_eq!(ty.short_name(), "Timestamp");
    }

    #[test]
    fn equality_ignores_surrounding_whitespace() {
        assert_eq!(BehaviorType::new(" a::B "), BehaviorType::from("a::B"));
        assert_ne!(BehaviorType::new("a::B"), BehaviorType::new("c::B"));
    }
}

#[cfg(test)]
mod priority {
    use crate::{CoreError, OrderingConfig, PriorityRange};

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(matches!(
            PriorityRange::new(5, 1),
            Err(CoreError::InvalidRange { min: 5, max: 1 })
        ));
        assert!(PriorityRange::new(3, 3).is_ok());
    }

    #[test]
    fn contains_clamp_width() {
        let r = PriorityRange::new(-2, 2).unwrap();
        assert!(r.contains(-2));
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert_eq!(r.clamp(10), 2);
        assert_eq!(r.clamp(-10), -2);
        assert_eq!(r.width(), 5);
    }

    #[test]
    fn full_i32_width_does_not_overflow() {
        let r = PriorityRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(r.width(), 1u64 << 32);
    }

    #[test]
    fn config_default_matches_default_range() {
        let cfg = OrderingConfig::default();
        assert_eq!(cfg.range().unwrap(), PriorityRange::DEFAULT);
        assert_eq!(OrderingConfig::from(PriorityRange::DEFAULT), cfg);
    }

    #[test]
    fn config_rejects_inverted_bounds() {
        let cfg = OrderingConfig { priority_min: 10, priority_max: 0 };
        assert!(matches!(cfg.range(), Err(CoreError::Config(_))));
    }

    #[test]
    fn display() {
        assert_eq!(PriorityRange::DEFAULT.to_string(), "[-100, 100]");
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_serde {
    use crate::OrderingConfig;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: OrderingConfig = serde_json::from_str(r#"{ "priority_max": 10 }"#).unwrap();
        assert_eq!(cfg.priority_min, OrderingConfig::default().priority_min);
        assert_eq!(cfg.priority_max, 10);
    }
}
