mod test {
    use crate::core::*;
    use crate::levels::{LevelCatalog, builtin_levels};
    use crate::test::test_util::GameTestState;

    #[test]
    fn builtin_catalog_has_eight_levels_starting_with_the_tutorial() {
        let catalog = LevelCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog.iter().map(|level| level.name.as_str()).collect();

        assert_eq!(
            vec![
                "Tutorial",
                "Boxed In",
                "Breakout!",
                "Hallway Hijinks",
                "Four Door and Seven Years Ago...",
                "The Boombox",
                "Master and Commander",
                "Watergate",
            ],
            names
        );
    }

    #[test]
    fn every_level_loads_with_one_of_each_avatar_and_goal() {
        let mut game = GameTestState::builtin();
        for index in 0..builtin_levels().len() {
            game.game.load_level(index);
            let board = game.game.board();

            assert_eq!(MAX_GRID_WIDTH, board.width(), "level {}", index);
            assert_eq!(MAX_GRID_HEIGHT, board.height(), "level {}", index);
            for occupant in [Occupant::BlueAvatar, Occupant::GreenAvatar, Occupant::BlueGoal, Occupant::GreenGoal] {
                assert_eq!(1, board.count(occupant), "level {} {:?}", index, occupant);
            }
            for color in [AvatarColor::Blue, AvatarColor::Green] {
                assert_eq!(Ok(color.avatar()), board.get(&game.game.avatar(color)), "level {}", index);
                assert_eq!(Ok(color.goal()), board.get(&game.game.goal(color)), "level {}", index);
            }
        }
    }

    #[test]
    fn every_door_starts_closed_and_every_plate_sits_on_its_marker() {
        let mut game = GameTestState::builtin();
        for index in 0..builtin_levels().len() {
            game.game.load_level(index);
            let board = game.game.board();

            assert!(!game.game.plates().is_empty(), "level {}", index);
            for plate in game.game.plates().iter() {
                assert_eq!(Ok(plate.kind.marker()), board.get(&plate.at), "level {}", index);
                for cell in plate.door.cells() {
                    assert_eq!(Ok(Occupant::Door), board.get(&cell), "level {} door {}", index, cell);
                }
            }
        }
    }

    #[test]
    fn shades_stay_in_range_and_follow_the_seed() {
        let first = GameTestState::builtin();
        let second = GameTestState::builtin();
        let board = first.game.board();

        for pos in board.bounds().iter_positions() {
            let shade = board.shade(&pos).unwrap();
            match board.get(&pos).unwrap() {
                Occupant::Floor => assert!(shade < FLOOR_SHADES),
                Occupant::Wall => assert!(shade < WALL_SHADES),
                _ => assert_eq!(0, shade),
            }
            assert_eq!(board.shade(&pos), second.game.board().shade(&pos));
        }
    }

    #[test]
    fn overlay_glyphs_are_loaded_and_cleared() {
        let mut game = GameTestState::builtin();
        game.game.load_level(5);
        assert_eq!(Some('\u{264F}'), game.game.overlay(&Vec2::new(6, 8)));

        game.game.clear_board();
        assert_eq!(None, game.game.overlay(&Vec2::new(6, 8)));
        assert!(game.game.plates().is_empty());
        assert_eq!(0, game.game.board().count(Occupant::Wall));
    }
}
