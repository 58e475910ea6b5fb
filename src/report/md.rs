use crate::types::outcome::Outcome;

pub fn to_markdown(outcome: &Outcome) -> String {
    let mut output = String::new();
    output.push_str("# Course Compass Result\n\n");

    output.push_str("## Scores\n\n");
    for entry in &outcome.category_scores {
        output.push_str(&format!("- {}: {:.2}\n", entry.name, entry.score));
    }
    output.push('\n');

    output.push_str(&format!(
        "Engagement: {:.1} / threshold {:.1} ({})\n\n",
        outcome.engagement.total,
        outcome.engagement.threshold,
        if outcome.engagement.engaged {
            "engaged"
        } else {
            "low"
        }
    ));

    match (&outcome.top_code, &outcome.recommendation) {
        (Some(code), Some(recommendation)) => {
            output.push_str("## Recommendation\n\n");
            output.push_str(&format!("Profile code: {code}\n\n"));
            output.push_str(&format!("**{}**\n\n", recommendation.cluster));
            output.push_str(&format!("{}\n\n", recommendation.description));
            output.push_str("Typical electives:\n");
            for course in &recommendation.courses {
                output.push_str(&format!("- {course}\n"));
            }
            if !recommendation.links.is_empty() {
                output.push_str("\nFree learning:\n");
                for link in &recommendation.links {
                    output.push_str(&format!("- {link}\n"));
                }
            }
        }
        (None, Some(recommendation)) => {
            output.push_str("## Recommendation\n\n");
            output.push_str(&format!("**{}**\n\n", recommendation.cluster));
            output.push_str(&format!("{}\n", recommendation.description));
            for course in &recommendation.courses {
                output.push_str(&format!("- {course}\n"));
            }
        }
        _ => {
            output.push_str(
                "Result inconclusive: responses show too little engagement. \
                 Answer again, picking what you actually do.\n",
            );
        }
    }

    output
}

pub fn catalog_to_markdown() -> String {
    let mut output = String::new();
    output.push_str("# Question Catalog\n\n");
    for question in &crate::catalog::questions::QUESTIONS {
        output.push_str(&format!(
            "{}. {} [{} x{:.1}]\n   1) {}\n   2) {}\n",
            question.id,
            question.prompt,
            question.category.letter(),
            question.weight,
            question.option_one,
            question.option_two
        ));
    }
    output.push_str("\n# Trait Sliders (1-10)\n\n");
    for kind in crate::catalog::traits::TraitKind::ALL {
        output.push_str(&format!("- {}: {}\n", kind.name(), kind.prompt()));
    }
    output
}
