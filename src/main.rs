use std::env;
use std::process;

use log::info;

use quatkit::angle::deg_to_rad;
use quatkit::config::Config;
use quatkit::Quaternion;

fn main() {
    env_logger::init();

    let cfg = match Config::new(env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    info!("{cfg}");

    // q1 * p * q2 rotates p by twice the configured angle.
    let angle = deg_to_rad(cfg.angle);
    let axis = cfg.axis.normalize();
    let q1 = Quaternion::from_axis_angle(angle, axis);
    let q2 = Quaternion::from_axis_angle(-angle, axis);

    let p = cfg.point;
    print!("{p} {}deg > ", cfg.angle * 2.0);

    let p = q1 * p * q2;

    println!("{p}");
}
