//! Topic meaning tables for the bundled Lenormand catalog.
//!
//! Each row lists one meaning per card, ordered by card number (Rider = 1
//! through Garden = 20), for a single topic and position.

use crate::position::Position;
use crate::topic::Topic;

/// One meaning per catalog card, indexed by `card id - 1`.
pub type CardRow = [&'static str; 20];

/// Health meanings for the Focus position, by card number.
pub const HEALTH_FOCUS: CardRow = [
    "Focus on physical activity and health news", // Rider
    "Focus on minor health improvements and self-care", // Clover
    "Focus on long-term health journeys and medical travel", // Ship
    "Focus on home health, creating a healing environment", // House
    "Focus on long-term health growth and development", // Tree
    "Focus on unclear health issues, getting clarity", // Clouds
    "Focus on investigating health complexities", // Snake
    "Focus on ending unhealthy patterns", // Coffin
    "Focus on feeling good about your health", // Bouquet
    "Focus on decisive action for health intervention", // Scythe
    "Focus on energetic health habits", // Whip
    "Focus on communicating about health needs", // Birds
    "Focus on new health beginnings", // Child
    "Focus on clever health strategies", // Fox
    "Focus on strong health, building resilience", // Bear
    "Focus on hope for health improvements", // Stars
    "Focus on positive health changes", // Stork
    "Focus on loyal health support systems", // Dog
    "Focus on structured health approaches", // Tower
    "Focus on social activities for wellbeing", // Garden
];

/// Health meanings for the Block position, by card number.
pub const HEALTH_BLOCK: CardRow = [
    "Restlessness hindering health improvements", // Rider
    "Minor health setbacks, lack of luck in healing", // Clover
    "Circulation problems blocking health progress", // Ship
    "Unstable home environment affecting health", // House
    "Lack of vitality blocking health improvements", // Tree
    "Confusion hindering diagnosis and treatment", // Clouds
    "Hidden health issues blocking progress", // Snake
    "Fear of endings hindering health transformation", // Coffin
    "Lack of joy hindering health improvement", // Bouquet
    "Fear of sudden health changes or procedures", // Scythe
    "Tension hindering health recovery", // Whip
    "Anxious thoughts hindering healing", // Birds
    "Immaturity hindering health responsibility", // Child
    "Deceptive health information causing confusion", // Fox
    "Weakness hindering health recovery", // Bear
    "Hopelessness hindering health improvement", // Stars
    "Resistance to health changes blocking progress", // Stork
    "Lack of support hindering health recovery", // Dog
    "Restrictions hindering health access", // Tower
    "Social pressure affecting health choices", // Garden
];

/// Health meanings for the Flow position, by card number.
pub const HEALTH_FLOW: CardRow = [
    "Take action for health, Move toward vitality", // Rider
    "Be optimistic about health, Expect good outcomes", // Clover
    "Expand health horizons, Explore new treatments", // Ship
    "Create stable health routines, Focus on home healing", // House
    "Nurture long-term health, Focus on growth", // Tree
    "Seek clarity about health, Dispel confusion", // Clouds
    "Seek wisdom about health, Be discerning with treatments", // Snake
    "Allow health transformation, End unhealthy cycles", // Coffin
    "Accept health gifts, Seek joy in healing", // Bouquet
    "Take decisive action for health, Cut out harmful habits", // Scythe
    "Use energy wisely for health, Balance exertion", // Whip
    "Communicate openly about health needs", // Birds
    "Embrace new health beginnings, Fresh approaches", // Child
    "Be clever about health, Investigate options strategically", // Fox
    "Take control of health, Be strong in recovery", // Bear
    "Have hope for health, Seek guidance for healing", // Stars
    "Embrace positive health changes", // Stork
    "Seek loyal health support, Be a good patient", // Dog
    "Create structured health approaches, Access expertise", // Tower
    "Join health communities, Share wellness journeys", // Garden
];

/// Money meanings for the Focus position, by card number.
pub const MONEY_FOCUS: CardRow = [
    "Focus on new financial opportunities arriving", // Rider
    "Focus on small financial gains and opportunities", // Clover
    "Focus on business expansion and financial journeys", // Ship
    "Focus on home finances and property matters", // House
    "Focus on long-term financial growth strategies", // Tree
    "Focus on financial clarity and understanding", // Clouds
    "Focus on complex financial situations", // Snake
    "Focus on ending financial difficulties", // Coffin
    "Focus on financial gifts and appreciation", // Bouquet
    "Focus on decisive financial actions", // Scythe
    "Focus on energetic financial pursuits", // Whip
    "Focus on financial discussions and communications", // Birds
    "Focus on new financial beginnings", // Child
    "Focus on clever financial strategies", // Fox
    "Focus on financial strength and power", // Bear
    "Focus on hope for financial improvement", // Stars
    "Focus on positive financial changes", // Stork
    "Focus on loyal financial partnerships", // Dog
    "Focus on financial institutions and stability", // Tower
    "Focus on financial networking and community", // Garden
];

/// Money meanings for the Block position, by card number.
pub const MONEY_BLOCK: CardRow = [
    "Delays in income and financial news", // Rider
    "Financial bad luck blocking progress", // Clover
    "Business setbacks hindering financial movement", // Ship
    "Financial instability affecting home security", // House
    "Stagnant finances blocking growth", // Tree
    "Financial confusion causing uncertainty", // Clouds
    "Financial deception creating complications", // Snake
    "Financial stagnation blocking new opportunities", // Coffin
    "Unhappiness about finances blocking prosperity", // Bouquet
    "Financial recklessness causing problems", // Scythe
    "Financial tension creating stress", // Whip
    "Financial anxiety blocking clear thinking", // Birds
    "Financial immaturity hindering progress", // Child
    "Financial deception causing mistrust", // Fox
    "Financial weakness limiting options", // Bear
    "Financial hopelessness blocking vision", // Stars
    "Financial stagnation resisting change", // Stork
    "Financial disloyalty affecting partnerships", // Dog
    "Financial restrictions limiting freedom", // Tower
    "Social financial pressure causing stress", // Garden
];

/// Money meanings for the Flow position, by card number.
pub const MONEY_FLOW: CardRow = [
    "Actively pursue financial opportunities", // Rider
    "Be optimistic about financial prospects", // Clover
    "Expand financial horizons, explore new ventures", // Ship
    "Build stable financial foundations", // House
    "Nurture long-term financial growth", // Tree
    "Seek financial clarity and understanding", // Clouds
    "Be wise about financial complexities", // Snake
    "Allow financial transformation and renewal", // Coffin
    "Accept financial gifts and opportunities", // Bouquet
    "Be decisive with financial choices", // Scythe
    "Use energy wisely in financial pursuits", // Whip
    "Communicate openly about financial matters", // Birds
    "Embrace new financial beginnings", // Child
    "Be clever with financial strategies", // Fox
    "Be financially strong and protective", // Bear
    "Have hope for financial improvement", // Stars
    "Embrace positive financial changes", // Stork
    "Seek loyal financial partnerships", // Dog
    "Create financial stability and structure", // Tower
    "Network for financial opportunities", // Garden
];

/// Relationships meanings for the Focus position, by card number.
pub const RELATIONSHIPS_FOCUS: CardRow = [
    "Focus on communication in relationships", // Rider
    "Focus on enjoying minor relationship pleasures", // Clover
    "Focus on distance relationships or moving forward", // Ship
    "Focus on home life and family relationships", // House
    "Focus on deepening relationship roots", // Tree
    "Focus on relationship clarity and understanding", // Clouds
    "Focus on relationship complexities", // Snake
    "Focus on ending unhealthy relationship patterns", // Coffin
    "Focus on joy in relationships", // Bouquet
    "Focus on decisive relationship actions", // Scythe
    "Focus on passion in relationships", // Whip
    "Focus on relationship communication", // Birds
    "Focus on new relationship beginnings", // Child
    "Focus on strategic relationship thinking", // Fox
    "Focus on strong relationship foundations", // Bear
    "Focus on hope in relationships", // Stars
    "Focus on positive relationship changes", // Stork
    "Focus on loyal relationship connections", // Dog
    "Focus on structured relationship boundaries", // Tower
    "Focus on social relationships and community", // Garden
];

/// Relationships meanings for the Block position, by card number.
pub const RELATIONSHIPS_BLOCK: CardRow = [
    "Communication issues blocking connection", // Rider
    "Minor relationship disappointments building up", // Clover
    "Distance creating relationship barriers", // Ship
    "Home instability affecting relationships", // House
    "Lack of depth in relationships", // Tree
    "Relationship confusion causing misunderstandings", // Clouds
    "Deception blocking relationship trust", // Snake
    "Fear of relationship endings causing stagnation", // Coffin
    "Unhappiness blocking relationship joy", // Bouquet
    "Fear of decisive relationship actions", // Scythe
    "Relationship tension creating distance", // Whip
    "Relationship anxiety blocking communication", // Birds
    "Relationship immaturity causing problems", // Child
    "Relationship deception undermining trust", // Fox
    "Weakness in relationship foundations", // Bear
    "Hopelessness in relationship future", // Stars
    "Resistance to relationship changes", // Stork
    "Relationship disloyalty affecting trust", // Dog
    "Relationship restrictions causing isolation", // Tower
    "Social pressures affecting relationship quality", // Garden
];

/// Relationships meanings for the Flow position, by card number.
pub const RELATIONSHIPS_FLOW: CardRow = [
    "Take initiative in relationship communication", // Rider
    "Be optimistic in relationship matters", // Clover
    "Bridge distance, explore relationship growth", // Ship
    "Create stable home environment for relationships", // House
    "Nurture relationship depth and growth", // Tree
    "Seek relationship clarity through communication", // Clouds
    "Be wise in relationship complexities", // Snake
    "Allow relationship transformation when needed", // Coffin
    "Accept love gifts and relationship joy", // Bouquet
    "Be decisive in relationship matters", // Scythe
    "Resolve relationship conflicts constructively", // Whip
    "Communicate openly about relationship needs", // Birds
    "Embrace new relationship approaches", // Child
    "Be clever in relationship situations", // Fox
    "Be strong in relationship matters", // Bear
    "Have hope in relationship possibilities", // Stars
    "Embrace positive relationship changes", // Stork
    "Be loyal in relationship connections", // Dog
    "Create structured relationship boundaries", // Tower
    "Cultivate relationship community and support", // Garden
];

/// Spirituality meanings for the Focus position, by card number.
pub const SPIRITUALITY_FOCUS: CardRow = [
    "Focus on spiritual messages and guidance", // Rider
    "Focus on spiritual opportunities and blessings", // Clover
    "Focus on spiritual journeys and exploration", // Ship
    "Focus on spiritual foundation and sacred space", // House
    "Focus on spiritual growth and wisdom", // Tree
    "Focus on spiritual mysteries and intuition", // Clouds
    "Focus on spiritual transformation and kundalini", // Snake
    "Focus on spiritual release and letting go", // Coffin
    "Focus on spiritual gifts and blessings", // Bouquet
    "Focus on spiritual breakthroughs and clarity", // Scythe
    "Focus on spiritual discipline and practice", // Whip
    "Focus on spiritual communication and signs", // Birds
    "Focus on spiritual innocence and wonder", // Child
    "Focus on spiritual discernment and wisdom", // Fox
    "Focus on spiritual strength and protection", // Bear
    "Focus on spiritual guidance and divine light", // Stars
    "Focus on spiritual evolution and progress", // Stork
    "Focus on spiritual loyalty and devotion", // Dog
    "Focus on spiritual solitude and meditation", // Tower
    "Focus on spiritual community and connection", // Garden
];

/// Spirituality meanings for the Block position, by card number.
pub const SPIRITUALITY_BLOCK: CardRow = [
    "Rushing spiritual growth blocking authentic progress", // Rider
    "Superficial spirituality blocking depth", // Clover
    "Spiritual wandering without direction", // Ship
    "Rigid beliefs blocking spiritual growth", // House
    "Spiritual stagnation blocking evolution", // Tree
    "Spiritual confusion blocking clarity", // Clouds
    "Fear of transformation blocking growth", // Snake
    "Fear of spiritual death blocking rebirth", // Coffin
    "Spiritual materialism blocking authenticity", // Bouquet
    "Harsh self-judgment blocking progress", // Scythe
    "Spiritual conflict blocking peace", // Whip
    "Mental chatter blocking spiritual silence", // Birds
    "Spiritual immaturity blocking wisdom", // Child
    "Spiritual deception blocking truth", // Fox
    "Spiritual pride blocking humility", // Bear
    "Spiritual doubt blocking faith", // Stars
    "Resistance to spiritual change", // Stork
    "Blind faith blocking discernment", // Dog
    "Spiritual isolation blocking connection", // Tower
    "External influences blocking inner work", // Garden
];

/// Spirituality meanings for the Flow position, by card number.
pub const SPIRITUALITY_FLOW: CardRow = [
    "Move forward on your spiritual path", // Rider
    "Trust in divine timing and grace", // Clover
    "Explore new spiritual horizons", // Ship
    "Build strong spiritual foundations", // House
    "Nurture steady spiritual growth", // Tree
    "Trust the mystery of the spiritual journey", // Clouds
    "Embrace spiritual transformation", // Snake
    "Release what no longer serves your path", // Coffin
    "Accept spiritual gifts and blessings", // Bouquet
    "Make clear spiritual choices", // Scythe
    "Maintain consistent spiritual practice", // Whip
    "Listen to spiritual guidance", // Birds
    "Approach spirituality with fresh eyes", // Child
    "Use spiritual discernment wisely", // Fox
    "Stand strong in your spiritual truth", // Bear
    "Follow your spiritual guidance", // Stars
    "Welcome spiritual transformation", // Stork
    "Stay loyal to your spiritual path", // Dog
    "Find strength in spiritual solitude", // Tower
    "Connect with spiritual community", // Garden
];
/// The row for a topic and position.
pub fn row(topic: Topic, position: Position) -> &'static CardRow {
    match (topic, position) {
        (Topic::Health, Position::Focus) => &HEALTH_FOCUS,
        (Topic::Health, Position::Block) => &HEALTH_BLOCK,
        (Topic::Health, Position::Flow) => &HEALTH_FLOW,
        (Topic::Money, Position::Focus) => &MONEY_FOCUS,
        (Topic::Money, Position::Block) => &MONEY_BLOCK,
        (Topic::Money, Position::Flow) => &MONEY_FLOW,
        (Topic::Relationships, Position::Focus) => &RELATIONSHIPS_FOCUS,
        (Topic::Relationships, Position::Block) => &RELATIONSHIPS_BLOCK,
        (Topic::Relationships, Position::Flow) => &RELATIONSHIPS_FLOW,
        (Topic::Spirituality, Position::Focus) => &SPIRITUALITY_FOCUS,
        (Topic::Spirituality, Position::Block) => &SPIRITUALITY_BLOCK,
        (Topic::Spirituality, Position::Flow) => &SPIRITUALITY_FLOW,
    }
}
