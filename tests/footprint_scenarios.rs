use carbon_footprint::{
    calculate, recommendations, validate, CarbonInputs, Category, FoodInputs, FootprintResult,
    HomeEnergyInputs, ImpactClassifier, ImpactLevel, LifestyleInputs, ThresholdImpact,
    TransportationInputs,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

fn only_transportation() -> CarbonInputs {
    let mut inputs = CarbonInputs::zero();
    inputs.transportation = TransportationInputs {
        car_mileage: 5000.0,
        car_efficiency: 25.0,
        public_transport: 1000.0,
        flights: 2.0,
    };
    inputs
}

fn only_home_energy() -> CarbonInputs {
    let mut inputs = CarbonInputs::zero();
    inputs.home_energy = HomeEnergyInputs {
        electricity_usage: 300.0,
        gas_usage: 50.0,
        renewable_percentage: 20.0,
    };
    inputs
}

fn only_food() -> CarbonInputs {
    let mut inputs = CarbonInputs::zero();
    inputs.food = FoodInputs {
        meat_consumption: 3.0,
        local_food_percentage: 30.0,
        food_waste: 15.0,
    };
    inputs
}

fn only_lifestyle() -> CarbonInputs {
    let mut inputs = CarbonInputs::zero();
    inputs.lifestyle = LifestyleInputs {
        shopping_frequency: 2.0,
        recycling_percentage: 50.0,
    };
    inputs
}

fn assert_total_is_sum(r: &FootprintResult) {
    assert_close(r.total, r.transportation + r.home_energy + r.food + r.lifestyle);
}

#[test]
fn single_category_scenarios() {
    let r = calculate(&only_transportation());
    assert_close(r.transportation, 4.118);
    assert_close(r.total, 4.118);

    let r = calculate(&only_home_energy());
    assert_close(r.home_energy, 4.332);
    assert_close(r.transportation, 0.0);

    let r = calculate(&only_food());
    assert_close(r.food, 0.51012);

    let r = calculate(&only_lifestyle());
    assert_close(r.lifestyle, 0.51);
    assert_total_is_sum(&r);
}

#[test]
fn categories_are_additive() {
    let parts = [
        calculate(&only_transportation()).total,
        calculate(&only_home_energy()).total,
        calculate(&only_food()).total,
        calculate(&only_lifestyle()).total,
    ];
    let combined = calculate(&CarbonInputs::default());
    assert_total_is_sum(&combined);
    assert_close(combined.total, parts.iter().sum());
    assert_close(combined.total, 9.47012);
}

#[test]
fn zero_activity_with_any_efficiency() {
    for efficiency in [0.5, 10.0, 60.0, 1e6] {
        let mut inputs = CarbonInputs::zero();
        inputs.transportation.car_efficiency = efficiency;
        assert_eq!(calculate(&inputs).total, 0.0);
    }
}

#[test]
fn increasing_positive_weight_inputs_raises_footprint() {
    let base = CarbonInputs::default();
    let before = calculate(&base);

    let bumps: [(Category, fn(&mut CarbonInputs)); 7] = [
        (Category::Transportation, |i| i.transportation.car_mileage += 100.0),
        (Category::Transportation, |i| i.transportation.public_transport += 100.0),
        (Category::Transportation, |i| i.transportation.flights += 1.0),
        (Category::HomeEnergy, |i| i.home_energy.electricity_usage += 10.0),
        (Category::HomeEnergy, |i| i.home_energy.gas_usage += 5.0),
        (Category::Food, |i| i.food.meat_consumption += 1.0),
        (Category::Lifestyle, |i| i.lifestyle.shopping_frequency += 1.0),
    ];

    for (category, bump) in bumps {
        let mut inputs = base;
        bump(&mut inputs);
        let after = calculate(&inputs);
        assert!(after.get(category) > before.get(category), "{category:?}");
        assert!(after.total > before.total, "{category:?}");
    }
}

#[test]
fn sample_profile_end_to_end() {
    let inputs = CarbonInputs::default();
    validate(&inputs).unwrap();
    let r = calculate(&inputs);

    assert_eq!(ThresholdImpact::default().classify(r.total), ImpactLevel::Moderate);
    let cats: Vec<Category> = recommendations(&r).into_iter().map(|r| r.category).collect();
    assert_eq!(cats, vec![Category::Transportation, Category::HomeEnergy]);
}

#[test]
fn result_json_uses_camel_case() {
    let r = calculate(&only_home_energy());
    let json = serde_json::to_value(r).unwrap();
    assert!(json.get("homeEnergy").is_some());
    assert!(json.get("home_energy").is_none());

    let back: FootprintResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
