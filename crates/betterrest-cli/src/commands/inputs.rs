use betterrest_core::{CaffeineCount, SleepGoal, WakeTime};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Wake-up time: any HH:MM (default {})", WakeTime::default());

    println!("\nDesired amount of sleep (default {}):", SleepGoal::default());
    for goal in SleepGoal::all() {
        println!("  {goal}");
    }

    println!("\nDaily coffee intake (default {}):", CaffeineCount::default());
    for count in CaffeineCount::all() {
        println!("  {count}");
    }
    Ok(())
}
