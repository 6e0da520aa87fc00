use crate::core::instances::DenseInstance;

/// Five machines: the hotter, longer-running ones went down.
pub const SAMPLE_CSV: &str = "\
Machine_ID,Temperature,Run_Time,Downtime_Flag
M1,80,100,0
M2,90,120,1
M3,70,90,0
M4,95,150,1
M5,60,80,0
";

pub const MISSING_RUN_TIME_CSV: &str = "\
Machine_ID,Temperature,Downtime_Flag
M1,80,0
M2,90,1
";

/// `SAMPLE_CSV` rows as `[Temperature, Run_Time]` instances.
pub fn sample_instances() -> Vec<DenseInstance> {
    vec![
        DenseInstance::new(vec![80.0, 100.0], Some(0)),
        DenseInstance::new(vec![90.0, 120.0], Some(1)),
        DenseInstance::new(vec![70.0, 90.0], Some(0)),
        DenseInstance::new(vec![95.0, 150.0], Some(1)),
        DenseInstance::new(vec![60.0, 80.0], Some(0)),
    ]
}

/// Alternating labels with a wide margin on both features.
pub fn separable_instances(n: usize) -> Vec<DenseInstance> {
    (0..n)
        .map(|i| {
            let y = i % 2;
            let temperature = if y == 1 { 90.0 } else { 60.0 } + (i % 7) as f64;
            let run_time = if y == 1 { 140.0 } else { 90.0 } + (i % 5) as f64;
            DenseInstance::new(vec![temperature, run_time], Some(y))
        })
        .collect()
}

/// CSV text for `separable_instances(n)` with machine ids.
pub fn separable_csv(n: usize) -> String {
    let mut out = String::from("Machine_ID,Temperature,Run_Time,Downtime_Flag\n");
    for (i, inst) in separable_instances(n).iter().enumerate() {
        out.push_str(&format!(
            "M{},{},{},{}\n",
            i + 1,
            inst.values[0],
            inst.values[1],
            inst.class_value().unwrap_or(0)
        ));
    }
    out
}
