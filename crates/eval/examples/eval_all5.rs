// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.093s
// Hands/sec:       27945806
//
// highest-card     1302540
// one-pair         1098240
// two-pairs        123552
// three-of-a-kind  54912
// straight         10200
// flush            5108
// full-house       3744
// four-of-a-kind   624
// straight-flush   40
// ```

use std::time::Instant;

use psychic_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Pack::default().for_each_hand(|cards| {
        if let Ok(hand) = Hand::new(cards) {
            counts[hand.value() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for value in HandValue::values() {
        println!("{:<16} {}", value.caption(), counts[value as usize]);
    }
}
