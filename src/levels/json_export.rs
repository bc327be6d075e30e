use crate::levels::LevelDefinition;

pub fn definitions_to_json(definitions: &[LevelDefinition]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(definitions)
}

pub fn definitions_from_json(json: &str) -> Result<Vec<LevelDefinition>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::levels::{LevelCatalog, builtin_levels};

    #[test]
    fn exported_catalog_loads_back_and_compiles() {
        let json = definitions_to_json(&builtin_levels()).unwrap();
        let loaded = definitions_from_json(&json).unwrap();

        assert_eq!(builtin_levels(), loaded);
        assert_eq!(8, LevelCatalog::compile(&loaded).unwrap().len());
    }

    #[test]
    fn glyphs_are_optional_in_json() {
        let json = r##"[{
            "name": "tiny",
            "status": "tiny",
            "layout": ["#BGbg#"],
            "plates": []
        }]"##;
        let loaded = definitions_from_json(json).unwrap();
        assert!(loaded[0].glyphs.is_empty());
        assert!(LevelCatalog::compile(&loaded).is_ok());
    }
}
