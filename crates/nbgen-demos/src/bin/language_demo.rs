//! Driver for the demonstration routines.
//!
//! Prints a greeting, the first ten Fibonacci numbers, the even numbers
//! from a fixed list, and a message delivered after a one-second delay.

use std::time::Duration;

use nbgen_demos::delayed::DelayedMessage;
use nbgen_demos::fibonacci;
use nbgen_demos::filters;

#[tokio::main]
async fn main() {
    println!("Hello from Rust!");

    println!("Fibonacci Numbers:");
    for (i, value) in fibonacci::sequence(10).iter().enumerate() {
        println!("Fibonacci({i}) = {value}");
    }

    let numbers: Vec<i64> = (1..=10).collect();
    println!("\nEven numbers from 1-10:");
    for n in filters::even_numbers(&numbers) {
        println!("{n}");
    }

    println!("\nDelayed message:");
    let timer = DelayedMessage::spawn(
        "This message appears after 1 second!",
        Duration::from_secs(1),
    );
    if let Some(message) = timer.wait().await {
        println!("{message}");
    }
}
