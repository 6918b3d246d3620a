//! Built-in reference corpus: labeled behaviors, ratings, and examples
//!
//! The tables below seed the baseline. Category lookups (rating, palette,
//! explanation, examples) are keyed by label string and return `None` /
//! empty for labels that only exist in user-supplied datasets, so nothing
//! here closes the category set.

/// Reference behaviors per category, in declaration order. This order is
/// what the category registry and every tie-break ultimately derive from.
pub const BASELINE_BEHAVIORS: &[(&str, &[&str])] = &[
	(
		"safe",
		&[
			"Enjoys helping others and volunteers regularly",
			"Prefers quiet conversations and listens actively",
			"Respects personal boundaries and asks before sharing",
			"Shows empathy and emotional intelligence in interactions",
			"Maintains eye contact and uses appropriate body language",
			"Asks thoughtful questions and shows genuine interest in others",
		],
	),
	(
		"normal",
		&[
			"Engages in typical workplace small talk",
			"Participates in group activities when invited",
			"Shares personal experiences when appropriate",
			"Uses humor that is generally well-received",
			"Maintains friendships through regular contact",
			"Expresses opinions while respecting disagreement",
		],
	),
	(
		"extroverted",
		&[
			"Energized by large social gatherings and parties",
			"Initiates conversations with strangers easily",
			"Speaks loudly and enthusiastically in groups",
			"Enjoys being the center of attention",
			"Makes quick decisions and acts spontaneously",
			"Processes thoughts by talking them through with others",
		],
	),
	(
		"introverted",
		&[
			"Prefers one-on-one conversations over group discussions",
			"Needs quiet time alone to recharge after socializing",
			"Thinks carefully before speaking in meetings",
			"Enjoys deep, meaningful conversations over small talk",
			"Observes social situations before participating",
			"Communicates better through writing than speaking",
		],
	),
	(
		"socially_anxious",
		&[
			"Worries extensively about being judged by others",
			"Avoids social events due to fear of embarrassment",
			"Rehearses conversations mentally before speaking",
			"Experiences physical symptoms in social situations",
			"Overthinks social interactions after they happen",
			"Has difficulty making eye contact during conversations",
		],
	),
	(
		"dominant",
		&[
			"Takes charge in group settings naturally",
			"Speaks with authority and expects to be heard",
			"Makes decisions quickly for the group",
			"Interrupts others to make important points",
			"Uses confident body language and firm handshakes",
			"Challenges ideas directly when disagreeing",
		],
	),
	(
		"caution",
		&[
			"Sometimes interrupts others during conversations",
			"Occasionally shares too much personal information",
			"Can be overly competitive in group settings",
			"Makes jokes that sometimes miss the mark",
			"Has difficulty reading social cues in new situations",
			"Tends to dominate conversations about personal interests",
		],
	),
	(
		"warning",
		&[
			"Frequently ignores personal boundaries when told no",
			"Makes others uncomfortable with inappropriate comments",
			"Shows aggressive behavior when disagreed with",
			"Spreads gossip or private information about others",
			"Manipulates situations to get personal advantage",
			"Displays concerning obsessive behavior toward others",
		],
	),
];

/// Sociality rating: 1 (concerning) to 9 (highly positive)
#[derive(Debug, Clone, Copy)]
pub struct SocialityRating {
	pub score: u8,
	pub description: &'static str,
}

pub fn sociality_rating(label: &str) -> Option<SocialityRating> {
	let (score, description) = match label {
		"safe" => (9, "Highly positive social behaviors that build trust and connection"),
		"normal" => (7, "Standard social behaviors that are generally well-received"),
		"extroverted" => (8, "High-energy social behaviors that create dynamic interactions"),
		"introverted" => (8, "Thoughtful social behaviors that foster deep connections"),
		"socially_anxious" => (5, "Anxious social patterns that may limit social opportunities"),
		"dominant" => (6, "Assertive behaviors that can be positive or overwhelming depending on context"),
		"caution" => (4, "Behaviors that may cause minor social friction or awkwardness"),
		"warning" => (1, "Concerning behaviors that may harm relationships or cause discomfort"),
		_ => return None,
	};
	Some(SocialityRating { score, description })
}

/// Result explanation shown after an analysis
pub fn explanation(label: &str) -> Option<&'static str> {
	match label {
		"safe" => Some(
			"Your behavior patterns suggest you are very safe for social interaction. \
			 You show positive social behaviors and respect for others.",
		),
		"normal" => Some(
			"Your behavior patterns are within normal social ranges. \
			 You appear to have healthy social interaction patterns.",
		),
		"extroverted" => Some(
			"Your behavior patterns show high-energy social behaviors that create \
			 dynamic interactions. You are safe for social interaction.",
		),
		"introverted" => Some(
			"Your behavior patterns show thoughtful social behaviors that foster \
			 deep connections. You are safe for social interaction.",
		),
		"socially_anxious" => Some(
			"Your behavior patterns show anxious social patterns that may limit \
			 social opportunities but are not harmful to others.",
		),
		"dominant" => Some(
			"Your behavior patterns show assertive behaviors that can be positive \
			 or overwhelming depending on context.",
		),
		"caution" => Some(
			"Some of your behaviors may require attention in social settings. \
			 Consider being more mindful of social cues and boundaries.",
		),
		"warning" => Some(
			"Your behavior patterns suggest potential social interaction risks. \
			 Consider seeking guidance on healthy social behaviors.",
		),
		_ => None,
	}
}

/// Scatterplot palette for the stock labels
pub fn palette_color(label: &str) -> Option<(u8, u8, u8)> {
	match label {
		"safe" => Some((76, 175, 80)),
		"normal" => Some((33, 150, 243)),
		"extroverted" => Some((255, 87, 34)),
		"introverted" => Some((63, 81, 181)),
		"socially_anxious" => Some((156, 39, 176)),
		"dominant" => Some((121, 85, 72)),
		"caution" => Some((255, 152, 0)),
		"warning" => Some((244, 67, 54)),
		_ => None,
	}
}

/// Example social-media posts per category, shown in the hover popup.
/// The popup picks `behavior_index % examples.len()` so the same point
/// always shows the same post.
pub fn social_examples(label: &str) -> &'static [&'static str] {
	match label {
		"safe" => &[
			"📍 Community Food Bank • 2h\nJust wrapped up my Saturday shift. Seeing real community care feels revolutionary 💙 Maybe empathy isn't dead after all #CommunityFirst\n👍 47 ❤️ 12 💬 3",
			"🧑‍💼 Sarah M. • 4h\n@mike_j thanks for sharing your story today. Real conversations > performative ones ☕ #AuthenticConnection\n👍 23 ❤️ 8 💬 2",
			"📱 Alex Chen • 1d\nNoticed my upstairs neighbor looked stressed. Left cookies by their door 🍪 Small acts against social isolation #HumanityFirst\n👍 156 ❤️ 34 💬 12",
			"🎬 MovieNight_Jen • 3h\nThat documentary changed how I see housing inequality. Worth a watch and a longer conversation 🎭 #MediaLiteracy\n👍 89 ❤️ 23 💬 7",
			"💼 David Park • 5h\n@teammate_lisa your presentation today was genuinely thoughtful. Thanks for asking the hard questions 🙏 #WorkplaceHumanity\n👍 34 ❤️ 9 💬 1",
			"🏃‍♀️ Running_Rachel • 2h\nHelped someone at the gym instead of filming my workout. Living it beats performing it #RealConnection\n👍 67 ❤️ 18 💬 5",
		],
		"normal" => &[
			"☀️ WeatherWatcher_Tom • 3h\nAnyone else think this weather is perfect for walking meetings? 🚶‍♂️ #WorkLifeBalance\n👍 42 ❤️ 8 💬 6",
			"🍕 Office_Mike • 5h\nTeam lunch at that new Italian place. At least the food was good 😋 #CorporateLife\n👍 28 ❤️ 11 💬 4",
			"🎬 Weekend_Warrior • 1d\nMovie night with friends tomorrow. Trying that digital detox thing everyone talks about 📱❌ #DigitalDetox\n👍 73 ❤️ 15 💬 8",
			"😂 MondayMemes_Mary • 8h\nThis Monday meme is too real ☕ #MondayMood\n👍 124 ❤️ 37 💬 22",
			"📞 College_Connect • 2d\n@old_roommate_jen 3-hour catch-up call! Some friendships just pick up where they left off 💪 #AdultingIsWeird\n👍 45 ❤️ 12 💬 3",
			"💼 Policy_Pete • 4h\nDisagree with the remote work policy but said my piece respectfully. We'll see 🤝 #OfficeLife\n👍 67 ❤️ 14 💬 18",
		],
		"extroverted" => &[
			"🎉 PartyPlanner_Sam • 30m\nWHO'S READY FOR THE BIGGEST PARTY?! 200+ people confirmed! 🎉 #PartyTime\n👍 287 ❤️ 94 💬 45",
			"☕ CoffeeChat_Emma • 2h\nStarted chatting with a stranger at Blue Bottle - now we're hiking together this weekend! 🏔️ #RealConnection\n👍 156 ❤️ 32 💬 18",
			"🎤 Speaker_Jake • 1d\nConference season is my favorite season! In-person networking at #TechTalk2024 - let's connect! 📢\n👍 203 ❤️ 41 💬 29",
			"💃 SalsaLife_Maria • 4h\nSigned up for salsa lessons on a whim! Who else is in? Dance partners needed! 💃 #SpontaneousLife\n👍 89 ❤️ 27 💬 12",
			"🎲 GameNight_Host • 6h\nGAME NIGHT FRIDAY! Real games, real people, real competition! 🔥 #GameNight\n👍 73 ❤️ 22 💬 15",
			"💡 IdeaMachine_Tyler • 3h\nHad an idea in the meeting and spoke up immediately. Sometimes thinking out loud is exactly what the room needs! ⚡ #ThinkOutLoud\n👍 94 ❤️ 18 💬 8",
		],
		"introverted" => &[
			"📚 QuietReader_Alex • 8h\nSpent the evening with a good book. Deep solitude might be the most underrated luxury 🤔 #QuietRevolution\n👍 84 ❤️ 23 💬 7",
			"🍽️ QualityTime_Sarah • 1d\nDinner with my closest friend. 3 hours of real talk. Depth > breadth 💫 #DeepConnection\n👍 67 ❤️ 19 💬 5",
			"🧘 Mindful_Marcus • 5h\nTaking time to process instead of immediately reacting. Slowing down is underrated 🌱 #SlowLiving\n👍 92 ❤️ 31 💬 9",
			"✍️ Thoughtful_Writer • 12h\nWriting my thoughts before tomorrow's presentation. Time to think is time well spent 📝 #ThoughtfulWork\n👍 78 ❤️ 14 💬 6",
			"🦆 ParkObserver_Lily • 4h\nWatching duck hierarchies instead of scrolling. Nature doesn't perform for algorithms 🦆 #AnalogLife\n👍 45 ❤️ 12 💬 8",
			"📱 TextOver_Call • 6h\nTexting instead of calling because my thoughts deserve time to develop ✏️ #ThoughtfulLiving\n👍 156 ❤️ 47 💬 23",
		],
		"socially_anxious" => &[
			"☕ AnxiousCoffee_Jamie • 3h\nRehearsed ordering coffee for 20 minutes. Anyone else? Just me? 😅 #SocialAnxiety\n👍 234 ❤️ 89 💬 67",
			"🎉 SkippingParties_Quinn • 1d\nSkipping the office party again. The dread outweighs the free snacks 😰 #WorkplaceAnxiety\n👍 178 ❤️ 52 💬 34",
			"😳 Overthinking_Maya • 4h\nReplaying that 3-second goodbye interaction on loop... Was I too weird? Was I not weird enough? 🤦‍♀️ #Overthinking\n👍 267 ❤️ 94 💬 78",
			"💓 VideoCall_Dread • 6h\nHeart racing before every Zoom call. Cameras on should be illegal 😅 #ZoomCulture\n👍 189 ❤️ 56 💬 45",
			"🔍 SocialPrep_Taylor • 2d\nGoogling conversation starters before dinner. Small talk is a skill and I missed the class 🙃 #ConversationAnxiety\n👍 312 ❤️ 127 💬 89",
			"🚌 AvoidingEyeContact • 8h\nStaring at my phone on the bus so nobody talks to me. The screen is a shield 📱 #BusLife\n👍 145 ❤️ 38 💬 29",
		],
		"dominant" => &[
			"💼 TeamLead_Chris • 15m\nMeeting in 10 minutes with real solutions. Tired of meetings-about-meetings - let's ship something 📈 #ActualLeadership\n👍 67 ❤️ 12 💬 8",
			"📊 Strategy_Boss • 2h\nCompletely disagree with that Q4 strategy. [5-point plan attached] Someone has to make data-driven decisions 📈 #ResultsFirst\n👍 89 ❤️ 23 💬 34",
			"👑 ProjectOwner_Jordan • 4h\nTaking charge of the stalled project. Meeting tomorrow 9 AM sharp ⏰ #Accountability\n👍 54 ❤️ 8 💬 12",
			"✋ DecisionMaker_Pat • 6h\nInterrupted that endless debate to actually decide something. Discussion without resolution is just noise 💸 #MakeDecisions\n👍 73 ❤️ 15 💬 19",
			"🤝 NetworkingPro_Mike • 1d\nFirm handshake, eye contact, clear communication = 3 deals closed. Directness still works 💪 #SalesLife\n👍 98 ❤️ 21 💬 7",
			"🎯 StraightTalk_Kelly • 3h\nCalled out that terrible idea immediately. Honest beats polite when the stakes are real ⏱️ #StraightTalk\n👍 45 ❤️ 9 💬 23",
		],
		"caution" => &[
			"😬 Oversharer_Danny • 2h\nTalked about bonsai trees for 45 minutes straight at lunch. Reading the room is still a skill 🌳 #Oops\n👍 127 ❤️ 43 💬 28",
			"🤦 JokeFail_Sam • 5h\nPineapple pizza joke bombed because date's family owns an Italian pizzeria. Landed on a cultural landmine 🍕 #DateFail\n👍 89 ❤️ 34 💬 67",
			"🏆 CompetitiveGamer_Max • 1d\nGot TOO competitive about 90s cartoons trivia. The line between enthusiasm and steamrolling is thin 📢 #TriviaNight\n👍 156 ❤️ 78 💬 45",
			"📖 FirstDate_Overshare • 3h\n20-minute ex story during appetizers... maybe some social scripts exist for good reasons? 😅 #TMI\n👍 234 ❤️ 89 💬 123",
			"🤷 MissedCues_Alex • 6h\nKept talking about quarterly reports when everyone wanted weekend chat 📊 #SocialCues\n👍 67 ❤️ 23 💬 18",
			"💭 CryptoTalk_Jordan • 4h\nSpent entire dinner explaining blockchain. Monopolizing the table again... but smart contracts ARE fascinating 🤓 #TechTalk\n👍 78 ❤️ 12 💬 34",
		],
		"warning" => &[
			"🤷‍♂️ Persistent_Chad • 1h\nShe said no to coffee but I'm not giving up. Flowers tomorrow 🌹 #Persistence\n👍 12 ❤️ 3 💬 89",
			"📸 PhotoPoster_Kyle • 3h\nPosted those pics even though she said no. She looks great and everyone agrees! 📈 #ShareEverything\n👍 23 ❤️ 7 💬 156",
			"😤 AlwaysRight_Brad • 2h\nGot into a 'debate' with someone who couldn't handle facts. Someone has to educate these people! Logic > feelings 🧠 #FactsOverFeelings\n👍 34 ❤️ 8 💬 234",
			"👀 GossipCentral_Megan • 4h\nShared some tea about Sarah from accounting. People deserve to know the real story! ☕ #NoSecrets\n👍 45 ❤️ 12 💬 178",
			"📈 CareerClimber_Derek • 6h\nHighlighted my colleague's mistakes in the team meeting to get ahead. Just adapting to reality! 💼 #CareerMoves\n👍 28 ❤️ 5 💬 267",
			"💭 ObsessedWatcher_Tyler • 8h\nI know her entire schedule now (coffee 8am, gym M/W/F 6pm, groceries Sunday). Just... thorough research? 🛒 #ModernDating\n👍 15 ❤️ 2 💬 312",
		],
		_ => &[],
	}
}
