//! Word lists backing the rule-based tagger and the stop-word filter

/// Default English stop words
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything",
    "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became", "because",
    "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by", "ca",
    "call", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "due",
    "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty", "four",
    "from", "front", "full", "further", "get", "give", "go", "had", "has", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself",
    "him", "himself", "his", "how", "however", "hundred", "i", "if", "in", "indeed", "into",
    "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly", "least",
    "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re",
    "really", "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems",
    "serious", "several", "she", "should", "show", "side", "since", "six", "sixty", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
    "thereupon", "these", "they", "third", "this", "those", "though", "three", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used",
    "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Connector words, degree boilerplate and recency qualifiers common in postings
pub const DOMAIN_STOP_WORDS: &[&str] = &[
    "or", "in", "a", "with", "from", "an", "other", "such", "as", "to", "for", "on", "of",
    "and", "and/or", "s", "/", "-",
    "recent", "recently", "currently", "first", "high", "preferred", "similar", "relevant",
    "equivalent", "related",
    "degree", "field", "fields", "discipline", "subject", "subjects", "course", "courses",
    "major", "majors", "work", "experience",
];

/// Typographic punctuation outside the ASCII range
pub const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2019}', '\u{201D}', '\u{201C}', '\u{2018}', '\u{2013}', '\u{2014}', '\u{2026}',
];

/// Base forms recognised as verbs
pub const VERBS: &[&str] = &[
    "accelerate", "achieve", "act", "adapt", "add", "address", "adhere", "administer",
    "adopt", "advise", "advocate", "align", "allocate", "analyse", "analyze", "anticipate",
    "apply", "approve", "architect", "assemble", "assess", "assign", "assist", "attend",
    "audit", "author", "automate", "balance", "benchmark", "brainstorm", "break", "bring",
    "budget", "build", "calculate", "capture", "carry", "challenge", "champion", "change",
    "check", "choose", "clarify", "close", "coach", "code", "collaborate", "collect",
    "combine", "communicate", "compare", "compile", "complete", "comply", "compose",
    "conduct", "configure", "connect", "consolidate", "construct", "consult", "contribute",
    "control", "convert", "coordinate", "craft", "create", "curate", "customize", "debug",
    "decide", "decompose", "define", "delegate", "deliver", "demonstrate", "deploy",
    "derive", "describe", "design", "detect", "determine", "develop", "diagnose", "direct",
    "discover", "distribute", "document", "draft", "drive", "educate", "elevate",
    "eliminate", "embrace", "empower", "enable", "encourage", "enforce", "engage",
    "engineer", "enhance", "enrich", "ensure", "escalate", "establish", "estimate",
    "evaluate", "evolve", "examine", "exceed", "execute", "expand", "explore", "expose",
    "extend", "extract", "facilitate", "find", "fix", "forecast", "formulate", "foster",
    "gather", "generate", "get", "give", "go", "govern", "grow", "guide", "handle",
    "harden", "help", "hire", "hold", "host", "identify", "implement", "improve",
    "increase", "influence", "inform", "ingest", "initiate", "innovate", "inspect",
    "install", "instrument", "integrate", "interact", "interpret", "interview", "introduce",
    "investigate", "iterate", "join", "keep", "label", "launch", "lead", "learn",
    "leverage", "liaise", "listen", "load", "localize", "maintain", "make", "manage",
    "mature", "maximize", "measure", "meet", "mentor", "migrate", "minimize", "mitigate",
    "model", "modernize", "modify", "monitor", "motivate", "move", "navigate", "negotiate",
    "observe", "obtain", "onboard", "operate", "optimise", "optimize", "orchestrate",
    "organize", "oversee", "own", "package", "participate", "partner", "patch", "perform",
    "pilot", "plan", "predict", "prepare", "present", "preserve", "prevent", "prioritize",
    "process", "produce", "program", "promote", "propose", "protect", "prototype",
    "provide", "provision", "publish", "pursue", "query", "raise", "rank", "reach", "read",
    "rebuild", "receive", "recommend", "reconcile", "recruit", "redesign", "reduce",
    "refactor", "refine", "release", "remediate", "remove", "render", "replace", "report",
    "represent", "reproduce", "require", "research", "resolve", "respond", "restore",
    "retain", "retrieve", "reuse", "review", "rewrite", "run", "scale", "schedule", "scope",
    "score", "search", "secure", "seek", "select", "sell", "send", "serve", "set", "shape",
    "share", "ship", "show", "simplify", "solve", "source", "speak", "spearhead", "specify",
    "stabilize", "standardize", "stay", "store", "streamline", "strengthen", "structure",
    "submit", "summarize", "supervise", "support", "sustain", "synthesize", "tackle",
    "tailor", "take", "teach", "test", "think", "track", "train", "transform", "translate",
    "troubleshoot", "tune", "understand", "update", "upgrade", "uphold", "use", "validate",
    "verify", "visualize", "work", "wrangle", "write",
];

/// Verbs that are frequently used as nouns; the tagger resolves them from context
pub const NOUN_VERB_AMBIGUOUS: &[&str] = &[
    "architect", "audit", "benchmark", "budget", "challenge", "change", "check", "code",
    "control", "design", "document", "draft", "engineer", "forecast", "host", "interview",
    "label", "lead", "load", "model", "monitor", "package", "partner", "patch", "pilot",
    "plan", "process", "program", "prototype", "query", "rank", "reach", "release",
    "report", "research", "review", "run", "scale", "schedule", "scope", "score", "search",
    "set", "shape", "share", "show", "source", "store", "structure", "support", "test",
    "track", "train", "update", "work",
];

/// Irregular inflected verb forms and their lemmas
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("are", "be"), ("is", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("built", "build"), ("led", "lead"), ("ran", "run"),
    ("wrote", "write"), ("written", "write"), ("made", "make"), ("took", "take"),
    ("taken", "take"), ("went", "go"), ("gone", "go"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"), ("understood", "understand"), ("set", "set"),
    ("drove", "drive"), ("driven", "drive"), ("learnt", "learn"), ("brought", "bring"),
    ("thought", "think"), ("sought", "seek"), ("met", "meet"), ("held", "hold"),
    ("oversaw", "oversee"), ("overseen", "oversee"), ("grew", "grow"), ("grown", "grow"),
    ("found", "find"), ("kept", "keep"), ("sold", "sell"), ("sent", "send"),
    ("shown", "show"), ("spoke", "speak"), ("spoken", "speak"), ("taught", "teach"),
    ("chose", "choose"), ("chosen", "choose"), ("broke", "break"), ("broken", "break"),
    ("rebuilt", "rebuild"), ("rewrote", "rewrite"), ("rewritten", "rewrite"),
];

/// Irregular plural nouns and their lemmas
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("analyses", "analysis"), ("children", "child"), ("criteria", "criterion"),
    ("people", "person"), ("indices", "index"), ("matrices", "matrix"),
    ("men", "man"), ("women", "woman"), ("hypotheses", "hypothesis"),
];

/// Terms that end in `s` but are not plurals
pub const INVARIANT_TERMS: &[&str] = &[
    "analytics", "aws", "business", "css", "devops", "dataops", "mlops", "gitops",
    "finops", "dns", "ecs", "eks", "aks", "gcs", "https", "ios", "macos", "jenkins",
    "kubernetes", "js", "nodejs", "nextjs", "vuejs", "express", "pandas", "postgres",
    "redis", "sas", "sass", "sqs", "sns", "kms", "rds", "tls", "mathematics", "physics",
    "statistics", "economics", "logistics", "process", "access", "status", "success",
    "series", "news", "canvas", "focus", "bonus", "campus", "corpus",
];

/// Adjectives that suffix rules would miss
pub const ADJECTIVES: &[&str] = &[
    "agile", "large", "new", "good", "great", "strong", "solid", "deep", "broad", "fast",
    "small", "complex", "robust", "modern", "senior", "junior", "excellent", "key",
    "critical", "clean", "secure", "native", "distributed", "proficient", "fluent",
    "hands-on", "open", "real", "best", "better", "high", "low", "mobile", "remote",
    "technical", "scalable", "reliable", "efficient", "effective", "quick", "smart",
    "independent", "relevant", "similar", "equivalent", "preferred", "recent", "mature",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "all", "any",
    "some", "no", "our", "your", "their", "its", "my", "his", "her", "both", "either",
    "neither",
];

pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "over", "under",
    "across", "through", "throughout", "between", "among", "within", "without", "about",
    "against", "via", "per", "during", "after", "before", "around", "towards", "toward",
    "upon", "like", "beyond",
];

pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "who", "whom",
    "which", "what", "yourself", "ourselves", "themselves", "itself", "everyone",
    "someone", "anyone",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "and/or", "while", "whereas", "if", "because", "although",
    "when", "where", "whether", "so", "yet", "as", "than",
];

pub const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must",
];

pub const ADVERBS: &[&str] = &[
    "also", "well", "very", "not", "often", "always", "never", "closely", "highly",
    "effectively", "actively", "independently", "currently", "recently", "ideally",
    "strongly", "regularly", "continuously", "proactively", "quickly", "together",
];
