use glam::Vec2;
use raycaster::ray::{scan, Family};
use raycaster::{Command, Config, DrawList, Frame, Map, Player};

fn bordered_box() -> Map {
    let src = "##########\n".to_owned() + &"#........#\n".repeat(8) + "##########\n";
    Map::parse(&src, 64.).unwrap()
}

#[test]
fn facing_east_in_a_bordered_box() {
    let config = Config::default();
    let map = bordered_box();
    let player = Player::spawn(&map).unwrap();
    assert_eq!(player.pos, Vec2::new(70., 70.));
    assert_eq!(player.direction(), 0.);

    // rays parallel to horizontal grid lines never strike one
    assert_eq!(scan(&map, player.pos, 0., Family::Horizontal), None);
    let wall = scan(&map, player.pos, 0., Family::Vertical).unwrap();
    assert!((wall.distance - (576. - 70.)).abs() < 1e-4);

    let frame = Frame::cast(&player, &map, &config);
    let (centre, hit) = frame.slices(&config).nth(30).unwrap();
    assert_eq!(hit.family, Family::Vertical);
    assert!((hit.distance - 506.).abs() < 1e-2);
    let expected = 64. * 480. / 506.;
    assert!((centre.height - expected).abs() < 1e-2);

    let mut list = DrawList::new();
    frame.draw(&map, &config, &mut list).unwrap();
    assert_eq!(list.lines().count(), 1 + 2 * config.num_rays);
}

#[test]
fn walking_into_the_east_wall() {
    let config = Config::default();
    let map = bordered_box();
    let mut player = Player::spawn(&map).unwrap();

    for _ in 0..200 {
        player.apply(Command::MoveForward, &map, &config);
    }
    // stopped by the wall tile beginning at x = 576
    assert!(player.pos.x < 576.);
    assert!(player.pos.x > 576. - config.move_step);
    assert_eq!(player.pos.y, 70.);

    // a wall hugged this closely still projects to the full view height
    let frame = Frame::cast(&player, &map, &config);
    let (centre, _) = frame.slices(&config).nth(30).unwrap();
    assert_eq!(centre.height, config.view_height);
}
