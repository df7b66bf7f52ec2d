use password_policy_core::{demo_password_policy, init};

fn main() {
    if let Err(e) = init() {
        eprintln!("Logging disabled: {}", e);
    }

    log::info!("Running password policy demonstration");
    println!("{}", demo_password_policy());
}
