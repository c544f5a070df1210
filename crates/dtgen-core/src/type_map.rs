//! Parsing of `old:new[,old:new...]` conversion tables.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{MappingSide, TypeMapError};
use crate::label::TypeLabel;

/// Source-label to target-label conversion table.
///
/// Built once from the CLI string and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: BTreeMap<TypeLabel, TypeLabel>,
    overridden: Vec<TypeLabel>,
}

impl TypeMap {
    /// Parse a type map; a repeated source label overwrites the earlier one.
    pub fn parse(input: &str) -> Result<Self, TypeMapError> {
        let mut map = Self::default();
        for (source, target) in parse_segments(input)? {
            if map.entries.insert(source, target).is_some() && !map.overridden.contains(&source) {
                map.overridden.push(source);
            }
        }
        Ok(map)
    }

    /// Parse a type map, rejecting repeated source labels.
    pub fn parse_strict(input: &str) -> Result<Self, TypeMapError> {
        let mut map = Self::default();
        for (source, target) in parse_segments(input)? {
            if map.entries.insert(source, target).is_some() {
                return Err(TypeMapError::DuplicateSource { label: source });
            }
        }
        Ok(map)
    }

    /// Target label for a source label, if one was requested.
    pub fn target_for(&self, source: TypeLabel) -> Option<TypeLabel> {
        self.entries.get(&source).copied()
    }

    /// Source labels that appeared more than once (later entry kept).
    pub fn overridden(&self) -> &[TypeLabel] {
        &self.overridden
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeLabel, TypeLabel)> + '_ {
        self.entries.iter().map(|(source, target)| (*source, *target))
    }
}

impl FromStr for TypeMap {
    type Err = TypeMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_segments(input: &str) -> Result<Vec<(TypeLabel, TypeLabel)>, TypeMapError> {
    input.split(',').map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<(TypeLabel, TypeLabel), TypeMapError> {
    let mut tokens = segment.split(':');
    let (Some(source), Some(target), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(TypeMapError::MalformedMapping {
            segment: segment.trim().to_string(),
        });
    };
    Ok((
        parse_label(source, MappingSide::Source)?,
        parse_label(target, MappingSide::Target)?,
    ))
}

fn parse_label(token: &str, side: MappingSide) -> Result<TypeLabel, TypeMapError> {
    TypeLabel::parse_token(token).ok_or_else(|| TypeMapError::InvalidType {
        side,
        token: token.trim().to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_mapping() {
        let map = TypeMap::parse("int:float").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.target_for(TypeLabel::Int), Some(TypeLabel::Float));
        assert_eq!(map.target_for(TypeLabel::Float), None);
    }

    #[test]
    fn test_parse_multiple_mappings_with_whitespace_and_case() {
        let map = TypeMap::parse(" INT : Str , bool:float").unwrap();
        assert_eq!(map.target_for(TypeLabel::Int), Some(TypeLabel::Str));
        assert_eq!(map.target_for(TypeLabel::Bool), Some(TypeLabel::Float));
        assert!(map.overridden().is_empty());
    }

    #[test]
    fn test_duplicate_source_last_write_wins() {
        let map = TypeMap::parse("int:float,int:str,int:bool").unwrap();
        assert_eq!(map.target_for(TypeLabel::Int), Some(TypeLabel::Bool));
        assert_eq!(map.overridden(), &[TypeLabel::Int]);
    }

    #[test]
    fn test_strict_rejects_duplicate_source() {
        let err = TypeMap::parse_strict("int:float,str:object,int:str").unwrap_err();
        assert_eq!(
            err,
            TypeMapError::DuplicateSource {
                label: TypeLabel::Int
            }
        );
    }

    #[test]
    fn test_missing_colon_is_malformed() {
        let err = TypeMap::parse("int-float").unwrap_err();
        assert_eq!(
            err,
            TypeMapError::MalformedMapping {
                segment: "int-float".to_string()
            }
        );
    }

    #[test]
    fn test_extra_colon_is_malformed() {
        assert!(matches!(
            TypeMap::parse("int:float:str"),
            Err(TypeMapError::MalformedMapping { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            TypeMap::parse(""),
            Err(TypeMapError::MalformedMapping { .. })
        ));
        assert!(matches!(
            TypeMap::parse("int:float,"),
            Err(TypeMapError::MalformedMapping { .. })
        ));
    }

    #[test]
    fn test_invalid_source_token() {
        let err = TypeMap::parse("Decimal:float").unwrap_err();
        assert_eq!(
            err,
            TypeMapError::InvalidType {
                side: MappingSide::Source,
                token: "decimal".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_target_token() {
        let err = TypeMap::parse("int:float,bool:text").unwrap_err();
        assert_eq!(
            err,
            TypeMapError::InvalidType {
                side: MappingSide::Target,
                token: "text".to_string()
            }
        );
    }

    #[test]
    fn test_half_empty_segment_reports_invalid_type() {
        let err = TypeMap::parse("int:").unwrap_err();
        assert!(matches!(
            err,
            TypeMapError::InvalidType {
                side: MappingSide::Target,
                ..
            }
        ));
    }

    #[test]
    fn test_colon_between_blanks_reports_invalid_source() {
        let err = TypeMap::parse("int:float, : ").unwrap_err();
        assert_eq!(
            err,
            TypeMapError::InvalidType {
                side: MappingSide::Source,
                token: String::new()
            }
        );
    }

    #[test]
    fn test_from_str() {
        let map: TypeMap = "str:object".parse().unwrap();
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(TypeLabel::Str, TypeLabel::Object)]
        );
    }
}
