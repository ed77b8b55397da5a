//! Keyword classifier behind the canned assistant replies.
//!
//! Tiers are tested in declaration order and the first tier with a
//! matching substring wins. Trigger words overlap across tiers ("erro" in
//! a message about "código" still lands in the programming tier), so the
//! order is part of the contract.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Programming,
    Debugging,
    ApiIntegration,
    Database,
    Architecture,
    Default,
}

const PROGRAMMING_REPLY: &str = "Para esse problema de programação, sugiro usar uma abordagem modular. Primeiro, divida o problema em partes menores e gerencie cada uma separadamente. Use boas práticas como nomes de variáveis significativos e comentários apropriados.";

const DEBUGGING_REPLY: &str = "O erro que você está encontrando parece ser relacionado a um problema de escopo de variáveis. Verifique se todas as variáveis estão definidas antes de serem usadas e se os tipos de dados são compatíveis com as operações realizadas.";

const API_REPLY: &str = "Para integrar essa API, você precisa primeiro obter uma chave de API válida. Depois, use bibliotecas como axios (JavaScript) ou requests (Python) para fazer chamadas HTTP. Lembre-se de tratar erros e timeouts adequadamente.";

const DATABASE_REPLY: &str = "Para otimizar essa consulta de banco de dados, considere adicionar índices nas colunas frequentemente pesquisadas. Também é importante limitar os resultados retornados usando paginação e selecionar apenas as colunas necessárias.";

const ARCHITECTURE_REPLY: &str = "Ao projetar a arquitetura desse sistema, considere usar um padrão MVC para separar as responsabilidades. Para escalabilidade, pense em implementar microsserviços que possam ser escalados independentemente.";

const DEFAULT_REPLY: &str = "Como programador especializado, posso ajudar com desenvolvimento de software, resolução de problemas de código, arquitetura de sistemas, otimização de desempenho e integração de APIs. Por favor, forneça mais detalhes sobre o que você precisa para que eu possa ajudar melhor.";

/// Priority-ordered trigger table. `Default` is the fallthrough and has no row.
const TIERS: &[(Category, &[&str])] = &[
    (Category::Programming, &["programa", "código", "desenvolv"]),
    (Category::Debugging, &["erro", "bug", "problema"]),
    (Category::ApiIntegration, &["api", "integra"]),
    (Category::Database, &["banco de dados", "database", "sql"]),
    (Category::Architecture, &["arquitetura", "design", "estrutura"]),
];

impl Category {
    pub fn of(message: &str) -> Self {
        let message = message.to_lowercase();
        TIERS
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| message.contains(t)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Default)
    }

    pub fn reply(self) -> &'static str {
        match self {
            Category::Programming => PROGRAMMING_REPLY,
            Category::Debugging => DEBUGGING_REPLY,
            Category::ApiIntegration => API_REPLY,
            Category::Database => DATABASE_REPLY,
            Category::Architecture => ARCHITECTURE_REPLY,
            Category::Default => DEFAULT_REPLY,
        }
    }
}

/// Canned reply for `message`.
pub fn classify(message: &str) -> &'static str {
    Category::of(message).reply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tier_matches_single_keyword() {
        let cases = [
            ("programa", Category::Programming),
            ("código", Category::Programming),
            ("desenvolv", Category::Programming),
            ("erro", Category::Debugging),
            ("bug", Category::Debugging),
            ("problema", Category::Debugging),
            ("api", Category::ApiIntegration),
            ("integra", Category::ApiIntegration),
            ("banco de dados", Category::Database),
            ("database", Category::Database),
            ("sql", Category::Database),
            ("arquitetura", Category::Architecture),
            ("design", Category::Architecture),
            ("estrutura", Category::Architecture),
            ("olá", Category::Default),
        ];
        for (input, expected) in cases {
            assert_eq!(Category::of(input), expected, "input: {input}");
        }
    }

    #[test]
    fn earlier_tier_wins_on_overlap() {
        assert_eq!(
            Category::of("tenho um erro no meu programa"),
            Category::Programming
        );
        assert_eq!(
            Category::of("Estou tendo um erro no meu código"),
            Category::Programming
        );
        assert_eq!(Category::of("bug na api"), Category::Debugging);
        assert_eq!(Category::of("design da api"), Category::ApiIntegration);
        assert_eq!(Category::of("estrutura do sql"), Category::Database);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Category::of("CÓDIGO"), Category::Programming);
        assert_eq!(Category::of("Database Design"), Category::Database);
    }

    #[test]
    fn substrings_inside_words_match() {
        // "rapidamente" contains "api"
        assert_eq!(Category::of("rapidamente"), Category::ApiIntegration);
        assert_eq!(Category::of("desenvolvimento"), Category::Programming);
    }

    #[test]
    fn placeholder_falls_through_to_default() {
        assert_eq!(classify("Sem mensagem"), DEFAULT_REPLY);
        assert_eq!(classify(""), DEFAULT_REPLY);
    }

    #[test]
    fn classification_is_deterministic() {
        for input in ["erro", "algo qualquer", "SQL lento", ""] {
            assert_eq!(classify(input), classify(input));
        }
    }
}
