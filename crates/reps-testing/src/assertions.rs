//! Grip-level assertions and helpers shared by the render tests.

use anyhow::{Context, Result};
use reps_types::{node_type, Grip};

/// Element node grips found in an object's own properties, in property order.
///
/// These are the values a UI lets the user highlight or select in the
/// inspector, whether or not they are still connected to a document.
pub fn selectable_in_inspector_grips(grip: &Grip) -> Vec<Grip> {
    let Some(preview) = grip.as_object().and_then(|object| object.preview.as_ref()) else {
        return Vec::new();
    };

    preview
        .own_properties
        .values()
        .filter_map(|descriptor| descriptor.grip())
        .filter(|value| {
            value
                .as_object()
                .is_some_and(|object| object.node_type() == Some(node_type::ELEMENT_NODE))
        })
        .cloned()
        .collect()
}

/// Assert that a grip is an object grip of the given class.
pub fn assert_class(grip: &Grip, expected: &str) -> Result<()> {
    let object = grip
        .as_object()
        .with_context(|| format!("Expected an object grip, got {}", grip.kind()))?;

    if object.class_name() != expected {
        anyhow::bail!("Expected class {}, got {}", expected, object.class_name());
    }

    Ok(())
}

/// Assert that recorded callback arguments are exactly `expected`, in order.
pub fn assert_grips_eq(actual: &[Grip], expected: &[Grip]) -> Result<()> {
    if actual.len() != expected.len() {
        anyhow::bail!("Expected {} grips, got {}", expected.len(), actual.len());
    }

    for (i, (actual, expected)) in actual.iter().zip(expected).enumerate() {
        if actual.actor() != expected.actor() || actual != expected {
            anyhow::bail!(
                "Grip {} differs: expected actor {:?}, got {:?}",
                i,
                expected.actor(),
                actual.actor()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::stub;

    #[test]
    fn test_selectable_grips() -> Result<()> {
        let grip = stub("grip", "testObjectWithNodes")?;
        let grips = selectable_in_inspector_grips(&grip);
        assert_eq!(grips.len(), 2);
        assert_eq!(grips[0].actor(), Some("server1.conn1.child1/obj215"));

        let grip = stub("grip", "testObjectWithDisconnectedNodes")?;
        assert_eq!(selectable_in_inspector_grips(&grip).len(), 2);

        assert!(selectable_in_inspector_grips(&stub("grip", "testBasic")?).is_empty());
        Ok(())
    }

    #[test]
    fn test_assert_class() -> Result<()> {
        let grip = stub("stylesheet", "testStyleSheet")?;
        assert_class(&grip, "CSSStyleSheet")?;
        assert!(assert_class(&grip, "Object").is_err());
        assert!(assert_class(&Grip::from(1.0), "Object").is_err());
        Ok(())
    }
}
