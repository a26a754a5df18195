use star_collector::entities::*;

use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn status_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { x: 400.0, y: 560.0, velocity: 0.0 },
        enemy: Enemy { x: 100.0, y: 100.0, dir: 1.0 },
        stars: vec![Star { x: 50.0, y: 50.0 }],
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds: Vec::new(),
        grass: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        rng: Pcg32::seed_from_u64(1),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.stars.push(Star { x: 5.0, y: 5.0 });
    cloned.bullets.push(Bullet { x: 1.0, y: 2.0 });

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.stars.len(), 1);
    assert!(original.bullets.is_empty());
}

#[test]
fn cloned_rng_replays_the_same_stream() {
    use rand::Rng;

    let state = GameState {
        player: Player { x: 400.0, y: 560.0, velocity: 0.0 },
        enemy: Enemy { x: 100.0, y: 100.0, dir: -1.0 },
        stars: Vec::new(),
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds: Vec::new(),
        grass: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        rng: Pcg32::seed_from_u64(7),
    };
    let mut a = state.clone();
    let mut b = state;
    let xs: Vec<u32> = (0..8).map(|_| a.rng.gen()).collect();
    let ys: Vec<u32> = (0..8).map(|_| b.rng.gen()).collect();
    assert_eq!(xs, ys);
}
