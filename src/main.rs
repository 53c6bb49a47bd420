use mealdb_scan::{find_simplest_meal, report};

#[tokio::main]
async fn main() {
    env_logger::init();

    let summary = find_simplest_meal().await;
    println!("{}", report::render(summary.simplest.as_ref()));
}
