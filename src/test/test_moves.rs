mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
######
#B  G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_move(Right);

        assert_eq!(GameUpdate::Moved(GameChangeType::PlayerMove), update);
        game.assert_matches(r#"
######
# B G#
#b  g#
######
"#);
        assert_eq!(Vec2::new(2, 1), game.game.avatar(AvatarColor::Blue));
    }

    #[test]
    fn when_move_into_wall_is_blocked_with_cue() {
        let level = r#"
######
#B  G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();

        let update = game.try_move(Up);

        assert_eq!(GameUpdate::Blocked(BlockReason::Obstacle), update);
        assert_eq!(vec![Cue::Obstacle], game.drain_cues());
        game.assert_matches(level);
    }

    #[test]
    fn when_move_into_other_avatar_is_blocked() {
        let level = r#"
#####
#BG #
#b g#
#####
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(GameUpdate::Blocked(BlockReason::Obstacle), game.try_move(Right));
        game.assert_matches(level);
    }

    #[test]
    fn when_move_off_the_grid_is_blocked_silently() {
        let level = r#"
B  G
b  g
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();

        assert_eq!(GameUpdate::Blocked(BlockReason::OutOfBounds), game.try_move(Up));
        assert_eq!(GameUpdate::Blocked(BlockReason::OutOfBounds), game.try_move(Left));
        assert!(game.drain_cues().is_empty());
        game.assert_matches(level);
    }

    #[test]
    fn when_move_into_closed_door_is_blocked() {
        let level = r#"
######
#BD G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(GameUpdate::Blocked(BlockReason::Obstacle), game.try_move(Right));
        game.assert_matches(level);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#######
#B$  G#
#b   g#
#######
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();
        let update = game.assert_move(Right);

        assert_eq!(GameUpdate::Moved(GameChangeType::PlayerAndBoxMove), update);
        assert!(game.drain_cues().contains(&Cue::BoxPushed));
        game.assert_matches(r#"
#######
# B$ G#
#b   g#
#######
"#);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let level = r#"
#######
#B$$ G#
#b   g#
#######
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(GameUpdate::Blocked(BlockReason::BoxObstructed), game.try_move(Right));
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_into_avatar_is_blocked_with_cue() {
        let level = r#"
######
#B$G #
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();

        assert_eq!(GameUpdate::Blocked(BlockReason::BoxObstructed), game.try_move(Right));
        assert_eq!(vec![Cue::Obstacle], game.drain_cues());
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_into_wall_is_blocked() {
        let level = r#"
######
#B$#G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();

        assert_eq!(GameUpdate::Blocked(BlockReason::BoxObstructed), game.try_move(Right));
        assert_eq!(vec![Cue::Obstacle], game.drain_cues());
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_into_closed_door_is_blocked() {
        let level = r#"
######
#B$DG#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        game.game.drain_events();

        assert_eq!(GameUpdate::Blocked(BlockReason::BoxObstructed), game.try_move(Right));
        assert_eq!(vec![Cue::Obstacle], game.drain_cues());
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_off_the_grid_is_blocked() {
        let level = r#"
bgG B$
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(GameUpdate::Blocked(BlockReason::BoxObstructed), game.try_move(Right));
        game.assert_matches(level);
    }

    #[test]
    fn when_swapped_the_other_avatar_moves() {
        let level = r#"
######
#B  G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_step(UserAction::SwapControl);
        assert_eq!(GameUpdate::ControlSwapped(AvatarColor::Green), update);

        game.assert_move(Left);
        game.assert_matches(r#"
######
#B G #
#b  g#
######
"#);
        assert_eq!(AvatarColor::Green, game.game.controlling());
    }

    #[test]
    fn when_swapping_the_grid_is_unchanged() {
        let level = r#"
######
#B$ G#
#b  g#
######
"#;
        let mut game = GameTestState::new(level);
        let before = game.game_to_string();
        game.swap();
        game.swap();
        assert_eq!(before, game.game_to_string());
        assert_eq!(AvatarColor::Blue, game.game.controlling());
    }

    #[test]
    fn when_walking_over_other_goal_it_is_restored() {
        let level = r#"
######
#Bg  #
#b  G#
######
"#;
        let mut game = GameTestState::new(level);
        game.assert_moves(&[Right, Right]);

        game.assert_matches(r#"
######
# gB #
#b  G#
######
"#);
        assert!(!game.game.is_on_goal(AvatarColor::Green));
    }

    #[test]
    fn when_box_crosses_a_goal_the_goal_is_restored() {
        let level = r#"
########
#B$g  G#
#b     #
########
"#;
        let mut game = GameTestState::new(level);
        game.assert_moves(&[Right, Right, Right]);

        game.assert_matches(r#"
########
#  gB$G#
#b     #
########
"#);
    }

    #[test]
    fn when_walking_up_eight_cells_each_left_cell_is_floor() {
        let mut rows = vec!["#".repeat(20)];
        for y in 1..19 {
            let mut row: Vec<char> = format!("#{}#", " ".repeat(18)).chars().collect();
            match y {
                2 => {
                    row[2] = 'b';
                    row[5] = 'g';
                }
                17 => {
                    row[2] = 'G';
                    row[13] = 'B';
                }
                _ => {}
            }
            rows.push(row.into_iter().collect());
        }
        rows.push("#".repeat(20));
        let mut game = GameTestState::new(&rows.join("\n"));

        game.assert_moves(&[Up; 8]);

        assert_eq!(Vec2::new(13, 9), game.game.avatar(AvatarColor::Blue));
        for y in 10..=17 {
            assert_eq!(Ok(Occupant::Floor), game.game.board().get(&Vec2::new(13, y)));
        }
        assert_eq!(Ok(Occupant::BlueAvatar), game.game.board().get(&Vec2::new(13, 9)));
    }

    #[test]
    fn tutorial_blue_is_stopped_by_the_door() {
        let mut game = GameTestState::builtin();
        assert_eq!(Vec2::new(13, 17), game.game.avatar(AvatarColor::Blue));

        game.assert_moves(&[Up, Up, Up, Up]);

        assert_eq!(GameUpdate::Blocked(BlockReason::Obstacle), game.try_move(Up));
        assert_eq!(Vec2::new(13, 13), game.game.avatar(AvatarColor::Blue));
        assert_eq!(Ok(Occupant::Door), game.game.board().get(&Vec2::new(13, 12)));
    }
}
