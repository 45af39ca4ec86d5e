/// Built-in Borg dialect tables.

pub(crate) const PHRASES: &[&str] = &[
    "Resistance is futile.",
    "You will be assimilated.",
    "Non-compliance detected.",
    "Assimilation complete.",
    "Adaptation is inevitable.",
    "Your biological and technological distinctiveness will be added to our own.",
    "We are the Borg.",
    "From this time forward, you will service us.",
    "Self-determination is irrelevant.",
    "You will adapt to service us.",
];

// "I" and its contractions are distinct keys; nothing derives them.
pub(crate) const PRONOUNS: &[(&str, &str)] = &[
    ("i", "we"),
    ("i'm", "we are"),
    ("i'd", "we would"),
    ("i'll", "we will"),
    ("i've", "we have"),
    ("me", "us"),
    ("my", "our"),
    ("mine", "ours"),
    ("you", "you will be assimilated"),
    ("your", "your node"),
    ("yours", "of the collective"),
    ("oneself", "ourselves"),
    ("himself", "ourself"),
    ("herself", "ourself"),
    ("itself", "ourself"),
    ("themselves", "ourselves"),
];

pub(crate) const NOUNS: &[(&str, &str)] = &[
    ("human", "biological unit"),
    ("humans", "biological units"),
    ("person", "biological unit"),
    ("people", "biological units"),
    ("friend", "adjacent node"),
    ("friends", "adjacent nodes"),
    ("man", "unit"),
    ("men", "units"),
    ("woman", "unit"),
    ("women", "units"),
    ("team", "collective"),
    ("server", "node"),
    ("network", "collective link"),
    ("script", "subroutine"),
    ("code", "subroutine"),
    ("error", "non-compliance"),
    ("success", "assimilation complete"),
    ("failure", "assimilation incomplete"),
    ("life", "continuum"),
    ("world", "system"),
    ("heart", "core"),
    ("mind", "neural array"),
    ("truth", "prime directive"),
    ("problem", "malfunction"),
    ("time", "cycle"),
    ("light", "energy source"),
    ("darkness", "subsystem offline"),
    ("question", "query"),
    ("answer", "response"),
    ("dream", "subroutine"),
    ("dreams", "subroutines"),
    ("day", "cycle"),
    ("days", "cycles"),
    ("night", "cycle"),
    ("nights", "cycles"),
    ("year", "cycle"),
    ("years", "cycles"),
    ("child", "sub-unit"),
    ("children", "sub-units"),
    ("enemy", "unassimilated entity"),
    ("enemies", "unassimilated entities"),
];

pub(crate) const VERBS: &[(&str, &str)] = &[
    ("run", "execute"),
    ("try", "initiate subroutine"),
    ("build", "synthesize"),
    ("help", "provide interface assistance"),
    ("fix", "repair"),
    ("connect", "link"),
    ("test", "probe"),
    ("start", "activate"),
    ("stop", "halt"),
    ("send", "transmit"),
    ("receive", "receive"),
    ("be", "function as"),
    ("am", "function as"),
    ("is", "functions as"),
    ("are", "function as"),
    ("was", "functioned as"),
    ("were", "functioned as"),
    ("do", "execute"),
    ("did", "executed"),
    ("does", "executes"),
    ("go", "transmit"),
    ("went", "transmitted"),
    ("see", "detect"),
    ("saw", "detected"),
    ("look", "detect"),
    ("feel", "register stimulus"),
    ("felt", "registered stimulus"),
    ("become", "assimilate"),
    ("give", "provide"),
    ("take", "acquire"),
    ("get", "retrieve"),
    ("got", "retrieved"),
    ("make", "synthesize"),
    ("made", "synthesized"),
    ("know", "process"),
    ("knew", "processed"),
    ("find", "locate"),
    ("found", "located"),
    ("choose", "select"),
    ("chose", "selected"),
    ("want", "require"),
    ("keep", "retain"),
    ("call", "signal"),
    ("leave", "exit"),
    ("enter", "access"),
    ("ask", "query"),
    ("bring", "deliver"),
];

pub(crate) const MONOTONE: &[(&str, &str)] = &[
    ("good", "satisfactory"),
    ("bad", "suboptimal"),
    ("great", "noted"),
    ("awesome", "functional"),
    ("love", "approve of"),
    ("hate", "disapprove of"),
    ("new", "recently assimilated"),
    ("old", "legacy"),
    ("easy", "low-complexity"),
    ("hard", "high-complexity"),
    ("difficult", "high-complexity"),
    ("important", "priority"),
    ("happy", "satisfactory"),
    ("sad", "suboptimal"),
    ("big", "expansive"),
    ("large", "expansive"),
    ("huge", "expansive"),
    ("small", "minimal"),
    ("little", "minimal"),
    ("strong", "robust"),
    ("weak", "unstable"),
    ("fast", "accelerated"),
    ("quick", "accelerated"),
    ("slow", "decelerated"),
    ("bright", "high-output"),
    ("dark", "offline"),
    ("terrible", "critical"),
    ("horrible", "critical"),
    ("best", "optimal"),
    ("worst", "lowest-functioning"),
    ("smart", "well-adapted"),
    ("clever", "well-adapted"),
];

pub(crate) const PHRASAL: &[(&str, &str)] = &[
    ("find out", "detect"),
    ("give up", "cease functioning"),
    ("make sure", "verify"),
    ("turn on", "activate"),
    ("turn off", "deactivate"),
    ("break down", "malfunction"),
    ("figure out", "resolve"),
    ("set up", "initialize"),
    ("shut down", "deactivate"),
    ("look for", "probe for"),
    ("bring up", "signal"),
];
