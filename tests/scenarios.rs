//! End-to-end scenarios: table in, staged reduction, report out.

use u_mdr::design::{Design, DomRel, Sense};
use u_mdr::dominance::DominanceRule;
use u_mdr::loader::parse_designs;
use u_mdr::optimize::{OptimizeConfig, OptimizeRunner};
use u_mdr::pareto::{pareto_front, RankedSet};
use u_mdr::report::{front_csv, front_ids, stage_summary};
use u_mdr::{ErrorKind, MdrError};

// Four aircraft metrics, all minimized.
const AIRCRAFT: &str = "\
L_D,M_empty,MTOW,Stall
TRUE,TRUE,TRUE,TRUE
10.0,300.0,500.0,20.0
11.0,290.0,520.0,19.0
12.0,310.0,480.0,21.0
9.0,320.0,510.0,22.0
13.0,280.0,470.0,18.0
10.5,305.0,505.0,20.5
";

fn config() -> OptimizeConfig {
    OptimizeConfig::default().with_parallel(false)
}

#[test]
fn mutually_non_dominated_set_is_kept() {
    let designs: Vec<Design> = [(1.0, 4.0), (2.0, 3.0), (3.0, 2.0), (4.0, 1.0)]
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| Design::from_values(i, &[a, b], Sense::Minimize))
        .collect();
    let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
    assert_eq!(front_ids(&front), "0,1,2,3");
}

#[test]
fn strictly_dominated_design_is_excluded() {
    let x = Design::from_values(0, &[5.0, 5.0], Sense::Minimize);
    let y = Design::from_values(1, &[1.0, 1.0], Sense::Minimize);
    let front = pareto_front(&[x, y], &DominanceRule::pair(0, 1)).unwrap();
    assert_eq!(front_ids(&front), "1");
}

#[test]
fn odd_metric_order_records_two_stages() {
    let batch = parse_designs("a,b,c\ntrue,true,true\n1,2,3\n3,2,1\n2,2,2\n", 0).unwrap();
    let result = OptimizeRunner::run(&batch.designs, &[0, 2, 1], &config()).unwrap();

    let rules: Vec<&DominanceRule> = result.stages.iter().map(|s| &s.rule).collect();
    assert_eq!(
        rules,
        vec![&DominanceRule::pair(0, 2), &DominanceRule::pair(2, 1)]
    );
}

#[test]
fn two_orders_on_the_same_table() {
    let batch = parse_designs(AIRCRAFT, 0).unwrap();
    let mut first = batch.designs.clone();
    let mut second = batch.designs.clone();

    let r1 = OptimizeRunner::run_in_place(&mut first, &[0, 2, 1, 3], &config()).unwrap();
    let r2 = OptimizeRunner::run_in_place(&mut second, &[3, 2, 0, 1], &config()).unwrap();

    // Design 4 is best on every metric but L_D and survives both orders.
    assert!(first.iter().any(|d| d.id() == 4));
    assert!(second.iter().any(|d| d.id() == 4));
    assert_eq!(r1.front, first);
    assert_eq!(r2.front, second);
    assert_eq!(r1.fronts()[0], batch.designs.as_slice());

    let csv = front_csv(&batch.registry, &first);
    assert!(csv.starts_with("design_id,L_D,M_empty,MTOW,Stall\n"));
    assert_eq!(csv.lines().count(), first.len() + 1);

    let summary = stage_summary(&r1);
    assert!(summary.starts_with("input: 6 designs\n"));
    assert!(summary.contains("stage 2: pair (1, 3)"));
}

#[test]
fn rank_accumulation_per_layer() {
    let layers = vec![DomRel::new(0, 1), DomRel::new(2, 3)];

    let mut set = RankedSet::new(layers.clone());
    set.insert(Design::from_values(0, &[1.0, 1.0, 5.0, 5.0], Sense::Minimize))
        .unwrap();
    set.insert(Design::from_values(1, &[2.0, 2.0, 5.0, 5.0], Sense::Minimize))
        .unwrap();
    assert_eq!(set.designs()[1].ranks(), &[1, 0]);
    assert_eq!(set.designs()[0].ranks(), &[0, 0]);

    let mut set = RankedSet::new(layers);
    set.insert(Design::from_values(0, &[1.0, 1.0, 5.0, 5.0], Sense::Minimize))
        .unwrap();
    set.insert(Design::from_values(1, &[1.0, 1.0, 4.0, 4.0], Sense::Minimize))
        .unwrap();
    assert_eq!(set.designs()[0].ranks(), &[0, 1]);
    assert_eq!(set.designs()[1].ranks(), &[0, 0]);
}

#[test]
fn malformed_table_is_a_parse_error() {
    let err = parse_designs("a,b\nTRUE,TRUE\n1.0,abc\n", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, MdrError::Parse { line: 3, .. }));
}

#[test]
fn dimension_mismatch_is_reported() {
    let batch = parse_designs(AIRCRAFT, 0).unwrap();
    let err = OptimizeRunner::run(&batch.designs, &[0, 1, 2], &config()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
}
