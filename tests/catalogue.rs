//! Each demo's observable behaviour, through the public API only.

use design_patterns::behavioral::chain::default_chain;
use design_patterns::behavioral::strategy::{DiscountStrategy, Order};
use design_patterns::behavioral::template_method::{a_moda_da_casa, concrete_one, concrete_two, vegan};
use design_patterns::creational::factory_method::{NorthZoneFactory, SouthZoneFactory, VehicleFactory};
use design_patterns::creational::monostate::{MonoState, SharedState};
use design_patterns::creational::prototype::{Address, Person};
use design_patterns::creational::simple_factory::create_vehicle;
use design_patterns::creational::singleton::SettingsRegistry;
use design_patterns::PatternError;

#[test]
fn chain_resolves_by_letter_group() {
    let chain = default_chain();
    assert!(chain.handle('A').starts_with("HandlerABC"));
    assert!(chain.handle('F').starts_with("HandlerDEF"));
    let fallback = chain.handle('Z');
    assert!(fallback.contains('Z'));
    assert!(!fallback.starts_with("Handler"));
}

#[test]
fn strategy_prices_one_thousand() {
    let totals: Vec<f64> = [
        DiscountStrategy::TwentyPercent,
        DiscountStrategy::FiftyPercent,
        DiscountStrategy::NoDiscount,
        DiscountStrategy::custom(5.0).unwrap(),
    ]
    .into_iter()
    .map(|strategy| Order::new(1000.0, strategy).total_with_discount().round())
    .collect();

    assert_eq!(totals, vec![800.0, 500.0, 0.0, 950.0]);
}

#[test]
fn template_variants_share_their_skeleton() {
    let one = concrete_one().run();
    let two = concrete_two().run();
    // Without its hook, ConcreteOne lines up step for step with ConcreteTwo.
    assert_eq!(one.len(), two.len() + 1);
    assert_eq!(one[2], two[1]);

    let house = a_moda_da_casa().prepare();
    let vegan = vegan().prepare();
    assert_eq!(house.last().unwrap(), "Serving the AModaCasa pizza");
    assert_eq!(vegan.last().unwrap(), "Serving the Vegan pizza");
}

#[test]
fn factories_reject_unknown_tags() {
    assert!(NorthZoneFactory::dispatch("moto_luxo").is_ok());
    assert!(matches!(
        SouthZoneFactory::dispatch("moto_luxo"),
        Err(PatternError::UnknownVehicle { .. })
    ));
    assert!(create_vehicle("moto_entrega").is_ok());
    assert!(matches!(
        create_vehicle("boat"),
        Err(PatternError::UnknownVehicle { .. })
    ));
}

#[test]
fn prototype_clone_is_independent() {
    let mut original = Person::new("João", "Justino");
    original.add_address(Address::new("Rua X", "1444"));

    let mut clone = original.clone_prototype();
    clone.first_name = "Nobody".into();

    assert_eq!(original.first_name, "João");
    assert_eq!(clone.addresses, original.addresses);
}

#[test]
fn singleton_and_monostate_share_state() {
    let registry = SettingsRegistry::new();
    let (a, b) = (registry.instance(), registry.instance());
    assert_eq!(a, b);
    a.set("name", "Joao");
    assert_eq!(b.get("name").as_deref(), Some("Joao"));

    let state = SharedState::new();
    let m1 = MonoState::new(&state, Some("Leo"), None);
    let m2 = MonoState::new(&state, None, None);
    m1.set("x", 20);
    assert_eq!(m2.get("x"), Some(serde_json::json!(20)));
}
