//! Prompt builders and the structured-output schema
//!
//! Prompts are written in Argentine Spanish because the generated copy must
//! come back in voseo; the image prompt stays in English.

use flyer_core::{Category, FlyerContent, TargetAudience};
use serde_json::{json, Value};

/// Brand the generated copy is written for
pub const BRAND_NAME: &str = "Little Founders";

/// Used in place of an empty user prompt
pub const DEFAULT_USER_REQUEST: &str = "Generar contenido educativo general";

/// Aspect ratio requested from the image model
pub const IMAGE_ASPECT_RATIO: &str = "1:1";

pub fn trends_prompt(target: TargetAudience) -> String {
    format!(
        "Investiga las tendencias actuales en redes sociales (TikTok, Instagram, Facebook) sobre \
         educación financiera específicamente para \"{target}\" en Argentina y Latinoamérica.\n\
         Identifica temas virales, ganchos (hooks) y qué tipo de contenido está funcionando mejor.\n\
         Resume los 3 hallazgos más importantes.",
        target = target.label()
    )
}

pub fn content_prompt(
    target: TargetAudience,
    category: Category,
    trends: &str,
    user_prompt: &str,
) -> String {
    let request = if user_prompt.trim().is_empty() {
        DEFAULT_USER_REQUEST
    } else {
        user_prompt.trim()
    };

    format!(
        "Eres un experto en marketing y finanzas para \"{BRAND_NAME}\".\n\
         Basado en estas tendencias: \"{trends}\".\n\
         Pedido específico del usuario: \"{request}\".\n\
         \n\
         Crea contenido para un flyer publicitario para \"{target}\".\n\
         Categoría: \"{category}\".\n\
         \n\
         REGLAS DE IDIOMA:\n\
         - Usa CASTELLANO ARGENTINO (voseo obligatorio: ahorrá, tené, fijate, hacé).\n\
         - Tono: Cercano, canchero pero educativo, muy profesional.\n\
         - El \"caption\" debe ser un texto largo y persuasivo para el cuerpo de la publicación en redes.\n\
         - Genera 5 hashtags locales y globales.",
        target = target.label(),
        category = category.label(),
    )
}

/// Visual prompt for the hero illustration
///
/// The target audience is accepted for parity with the other calls but the
/// brand style is the same for every audience.
pub fn image_prompt(content: &FlyerContent, _target: TargetAudience) -> String {
    format!(
        "Modern 3D flat illustration for a children's finance brand called {BRAND_NAME}.\n\
         Concept: {title}.\n\
         Vibe: Argentine startup style, friendly, vibrant colors (Orange, Blue).\n\
         No text. Minimalist and clean.",
        title = content.title
    )
}

/// OpenAPI-subset schema the content model must answer with
pub fn flyer_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING", "description": "Título con voseo argentino"},
            "description": {"type": "STRING", "description": "Bajada corta y potente"},
            "points": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "3 puntos clave para el carrusel"
            },
            "callToAction": {"type": "STRING", "description": "Cierre motivador"},
            "hashtags": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "5 hashtags"
            },
            "caption": {
                "type": "STRING",
                "description": "Texto extenso para el post de Instagram/Facebook/TikTok"
            }
        },
        "required": ["title", "description", "points", "callToAction", "hashtags", "caption"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trends_prompt_names_audience() {
        let prompt = trends_prompt(TargetAudience::Parents);
        assert!(prompt.contains("\"Padres y Educadores\""));
        assert!(prompt.contains("Argentina y Latinoamérica"));
    }

    #[test]
    fn test_content_prompt_includes_all_inputs() {
        let prompt = content_prompt(
            TargetAudience::Kids,
            Category::Challenge,
            "retos de 30 días",
            "ahorro para consola",
        );
        assert!(prompt.contains("\"retos de 30 días\""));
        assert!(prompt.contains("\"ahorro para consola\""));
        assert!(prompt.contains("\"Niños y Adolescentes\""));
        assert!(prompt.contains("\"Reto\""));
        assert!(prompt.contains("voseo"));
    }

    #[test]
    fn test_content_prompt_defaults_blank_request() {
        let prompt = content_prompt(TargetAudience::Kids, Category::Tip, "x", "   ");
        assert!(prompt.contains(DEFAULT_USER_REQUEST));
    }

    #[test]
    fn test_image_prompt_uses_title() {
        let content = FlyerContent {
            title: "Ahorrá para tu consola".to_string(),
            ..Default::default()
        };
        let prompt = image_prompt(&content, TargetAudience::Kids);
        assert!(prompt.contains("Concept: Ahorrá para tu consola."));
        assert!(prompt.contains("No text."));
    }

    #[test]
    fn test_schema_requires_every_flyer_field() {
        let schema = flyer_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        for field in [
            "title",
            "description",
            "points",
            "callToAction",
            "hashtags",
            "caption",
        ] {
            assert!(required.contains(&field), "missing {field}");
            assert!(schema["properties"].get(field).is_some());
        }
        assert_eq!(schema["properties"]["points"]["type"], "ARRAY");
    }
}
