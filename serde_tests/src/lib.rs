#[cfg(test)]
mod tests {

    use std::error::Error;

    use rs_mastermind::*;

    #[test]
    fn game_config_serde() {
        let config = GameConfig::default();

        let ser = ron::to_string(&config);
        assert!(ser.is_ok());

        let deser = ron::from_str::<GameConfig>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), config);
    }

    #[test]
    fn game_in_progress_serde() -> Result<(), Box<dyn Error>> {
        let secret = vec![Color::YELLOW, Color::YELLOW, Color::ORANGE, Color::RED];
        let mut game = Game::with_secret(GameConfig::default(), secret)?;
        for color in [Color::RED, Color::GREEN, Color::BLUE, Color::GREEN] {
            game.place(color)?;
        }
        game.submit()?;
        game.place(Color::PURPLE)?;

        let ser = ron::to_string(&game)?;
        let mut deser = ron::from_str::<Game>(&ser)?;

        assert_eq!(deser, game);
        // The restored game carries on from the same point.
        assert_eq!(deser.remove_last()?, Some(Color::PURPLE));
        assert_eq!(deser.history(), game.history());
        Ok(())
    }

    #[test]
    fn invalid_palette_is_caught_on_validate() -> Result<(), Box<dyn Error>> {
        let config = ron::from_str::<GameConfig>(
            "(duplicates_allowed: true, sequence_length: 2, number_of_guesses: 3, \
             palette: (colors: [(r: 1, g: 2, b: 3), (r: 1, g: 2, b: 3)]))",
        )?;

        assert_eq!(
            config.validate(),
            Err(MastermindError::DuplicateColor(Color::rgb(1, 2, 3)))
        );
        Ok(())
    }

    fn new_game_ron() -> Result<String, Box<dyn Error>> {
        let secret = vec![Color::RED, Color::RED, Color::RED, Color::RED];
        let game = Game::with_secret(GameConfig::default(), secret)?;
        Ok(ron::to_string(&game)?)
    }

    #[test]
    fn game_with_zero_active_row_is_rejected() -> Result<(), Box<dyn Error>> {
        let ser = new_game_ron()?;
        let tampered = ser.replace("active_row_index:1,", "active_row_index:0,");
        assert_ne!(tampered, ser);

        let deser = ron::from_str::<Game>(&tampered);

        assert!(deser.is_err());
        assert!(deser.unwrap_err().to_string().contains("active row 0"));
        Ok(())
    }

    #[test]
    fn game_with_mismatched_status_is_rejected() -> Result<(), Box<dyn Error>> {
        let ser = new_game_ron()?;
        let tampered = ser.replace("status:InProgress(1)", "status:Won");
        assert_ne!(tampered, ser);

        assert!(ron::from_str::<Game>(&tampered).is_err());
        Ok(())
    }

    #[test]
    fn game_with_wrong_score_is_rejected() -> Result<(), Box<dyn Error>> {
        let secret = vec![Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
        let mut game = Game::with_secret(GameConfig::default(), secret)?;
        for color in [Color::RED, Color::BLUE, Color::ORANGE, Color::ORANGE] {
            game.place(color)?;
        }
        game.submit()?;
        let ser = ron::to_string(&game)?;
        let tampered = ser.replace(
            "history:[(exact:1,inexact:1)]",
            "history:[(exact:3,inexact:0)]",
        );
        assert_ne!(tampered, ser);

        assert!(ron::from_str::<Game>(&tampered).is_err());
        Ok(())
    }

    #[test]
    fn game_with_board_too_small_is_rejected() -> Result<(), Box<dyn Error>> {
        let config = GameConfig {
            duplicates_allowed: true,
            sequence_length: 2,
            number_of_guesses: 3,
            palette: Palette::default(),
        };
        let ser = ron::to_string(&Game::with_secret(config, vec![Color::RED; 2])?)?;
        let tampered = ser.replace("number_of_guesses:3", "number_of_guesses:4");
        assert_ne!(tampered, ser);

        assert!(ron::from_str::<Game>(&tampered).is_err());
        Ok(())
    }
}
