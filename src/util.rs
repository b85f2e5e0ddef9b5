/// Evaluate a block, reporting wall time at debug level.
/// ```
/// # use ghost_circle::profile;
/// let n = profile!("sum", (0..10).sum::<i32>());
/// assert_eq!(n, 45);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
