use felt_engine::pot::PotManager;

#[test]
fn equal_stacks_make_a_single_pot() {
    let pots = PotManager::from_contributions(&[(1_000, true), (1_000, true)]);
    assert_eq!(pots.main_pot(), 2_000);
    assert!(pots.side_pots().is_empty());
    assert_eq!(pots.total(), 2_000);
}

#[test]
fn heads_up_short_stack_splits_off_a_side_pot() {
    let pots = PotManager::from_contributions(&[(500, true), (1_000, true)]);
    assert_eq!(pots.main_pot(), 1_000);
    assert_eq!(pots.side_pots(), vec![500]);
    assert_eq!(pots.layers()[0].eligible, vec![0, 1]);
    assert_eq!(pots.layers()[1].eligible, vec![1]);
}

#[test]
fn three_all_ins_layer_by_contribution_level() {
    // All-ins for 50/150/300 plus a live caller at 300.
    let pots =
        PotManager::from_contributions(&[(50, true), (150, true), (300, true), (300, true)]);
    let layers = pots.layers();
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].amount, 200); // 50 × 4
    assert_eq!(layers[0].eligible, vec![0, 1, 2, 3]);
    assert_eq!(layers[1].amount, 300); // 100 × 3
    assert_eq!(layers[1].eligible, vec![1, 2, 3]);
    assert_eq!(layers[2].amount, 300); // 150 × 2
    assert_eq!(layers[2].eligible, vec![2, 3]);
    assert_eq!(pots.total(), 800);
}

#[test]
fn folded_chips_stay_in_the_layers_they_reached() {
    let pots = PotManager::from_contributions(&[(100, false), (300, true), (300, true)]);
    let layers = pots.layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].amount, 300); // 100 × 3, folder's chips included
    assert_eq!(layers[0].eligible, vec![1, 2]);
    assert_eq!(layers[1].amount, 400);
    assert_eq!(layers[1].eligible, vec![1, 2]);
    assert_eq!(pots.total(), 700);
}

#[test]
fn uncontested_top_layer_rolls_down() {
    // The deepest contributor folded; their excess joins the contested pot.
    let pots = PotManager::from_contributions(&[(300, false), (150, true), (150, true)]);
    let layers = pots.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].amount, 600);
    assert_eq!(layers[0].eligible, vec![1, 2]);
}

#[test]
fn zero_contributions_are_ignored() {
    let pots = PotManager::from_contributions(&[(0, true), (40, true), (40, true)]);
    assert_eq!(pots.layers().len(), 1);
    assert_eq!(pots.main_pot(), 80);
    assert_eq!(pots.layers()[0].eligible, vec![1, 2]);
}

#[test]
fn layer_amounts_always_sum_to_the_contributions() {
    let contributions = [(75, true), (320, false), (410, true), (410, true), (12, true)];
    let pots = PotManager::from_contributions(&contributions);
    let wagered: u32 = contributions.iter().map(|&(amount, _)| amount).sum();
    assert_eq!(pots.total(), wagered);
}
