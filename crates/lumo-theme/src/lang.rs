//! Built-in English string catalog

use lumo_types::texts::Texts;

/// Built-in English catalog.
///
/// Unknown ids render as `[[id]]` so a missing string shows up in the form
/// instead of breaking it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTexts;

impl Texts for EnglishTexts {
	fn text(&self, id: &str) -> Box<str> {
		match lookup(id) {
			Some(text) => text.into(),
			None => format!("[[{}]]", id).into(),
		}
	}
}

fn lookup(id: &str) -> Option<&'static str> {
	Some(match id {
		"configtitle" => "Lumo",

		// Tabs
		"generalsettings" => "General settings",
		"advancedsettings" => "Advanced settings",
		"frontpagesettings" => "Frontpage settings",
		"footersettings" => "Footer settings",
		"forumsettings" => "Forum settings",

		// General
		"logo" => "Logo",
		"logodesc" => "The logo is displayed in the header.",
		"favicon" => "Favicon",
		"favicondesc" => "The favicon is shown in the browser tab.",
		"preset" => "Theme preset",
		"preset_desc" => "Pick a preset to broadly change the look of the theme.",
		"presetfiles" => "Additional theme preset files",
		"presetfiles_desc" => {
			"Preset files can be used to dramatically alter the appearance of the theme. \
			Uploaded files appear in the preset list above."
		}
		"loginbgimg" => "Login page background",
		"loginbgimg_desc" => "Upload a background image for the login page.",
		"brandcolor" => "Brand color",
		"brandcolor_desc" => "The accent color. Leave empty to use the preset's color.",
		"navbarheadercolor" => "Navbar header color",
		"navbarheadercolor_desc" => "Text color of the top navigation bar.",
		"navbarbg" => "Navbar background",
		"navbarbg_desc" => "Background color of the top navigation bar.",
		"navbarbghover" => "Navbar hover background",
		"navbarbghover_desc" => "Background color of navigation bar items under the pointer.",
		"coursepresentation" => "Course presentation",
		"coursepresentationdesc" => "How course cards are presented on listing pages.",
		"coursedefault" => "Default",
		"coursecover" => "Cover image",
		"courselistview" => "Course list view",
		"courselistviewdesc" => "Show enrolled courses as a list instead of cards.",

		// Advanced
		"rawscsspre" => "Raw initial SCSS",
		"rawscsspre_desc" => {
			"SCSS code injected before everything else. Most of the time it is used to \
			define variables."
		}
		"rawscss" => "Raw SCSS",
		"rawscss_desc" => "SCSS code appended to the end of the stylesheet.",
		"googleanalytics" => "Google Analytics code",
		"googleanalyticsdesc" => "The tracking id, e.g. UA-12345678-1. Leave empty to disable.",

		// Frontpage
		"headerimg" => "Header image",
		"headerimgdesc" => "Background image of the frontpage banner.",
		"bannerheading" => "Banner heading",
		"bannerheadingdesc" => "Main heading shown in the banner.",
		"bannercontent" => "Banner content",
		"bannercontentdesc" => "Text shown under the banner heading.",
		"displaymarketingbox" => "Display frontpage marketing boxes",
		"displaymarketingboxdesc" => "Show the four marketing boxes under the banner.",
		"marketingicon" => "Marketing icon",
		"marketingicondesc" => "Icon shown in this marketing box.",
		"marketingheading" => "Marketing heading",
		"marketingheadingdesc" => "Heading of this marketing box.",
		"marketingsubheading" => "Marketing subheading",
		"marketingsubheadingdesc" => "Subheading of this marketing box.",
		"marketingcontent" => "Marketing content",
		"marketingcontentdesc" => "Body text of this marketing box.",
		"marketingurl" => "Marketing link",
		"marketingurldesc" => "Target url of this marketing box. Leave empty for no link.",
		"sliderenabled" => "Enable slideshow",
		"sliderenableddesc" => "Show the slideshow to logged-in users on the dashboard.",
		"sliderfrontpage" => "Slideshow on frontpage",
		"sliderfrontpagedesc" => "Also show the slideshow on the frontpage for guests.",
		"slidercount" => "Slide count",
		"slidercountdesc" => {
			"Number of slides. Save and reload this page to see the fields for each slide."
		}
		"sliderimage" => "Slide image",
		"sliderimagedesc" => "Background image of this slide.",
		"slidertitle" => "Slide title",
		"slidertitledesc" => "Title shown on this slide.",
		"slidercaption" => "Slide caption",
		"slidercaptiondesc" => "Caption shown under the slide title.",
		"numbersfrontpage" => "Show site numbers",
		"numbersfrontpagedesc" => "Show user, course, and activity counts on the frontpage.",
		"sponsorsfrontpage" => "Show sponsors",
		"sponsorsfrontpagedesc" => "Show the sponsors block at the bottom of the frontpage.",
		"sponsorstitle" => "Sponsors title",
		"sponsorstitledesc" => "Heading of the sponsors block.",
		"sponsorstitledefault" => "Our sponsors",
		"sponsorssubtitle" => "Sponsors subtitle",
		"sponsorssubtitledesc" => "Text shown under the sponsors heading.",
		"sponsorssubtitledefault" => "Thanks to the companies supporting us",
		"sponsorscount" => "Sponsor count",
		"sponsorscountdesc" => {
			"Number of sponsor logos. Save and reload this page to see the fields for each."
		}
		"sponsorsimage" => "Sponsor image",
		"sponsorsimagedesc" => "Logo of this sponsor.",
		"sponsorsurl" => "Sponsor link",
		"sponsorsurldesc" => "Website of this sponsor. Leave empty for no link.",
		"clientsfrontpage" => "Show clients",
		"clientsfrontpagedesc" => "Show the clients block at the bottom of the frontpage.",
		"clientstitle" => "Clients title",
		"clientstitledesc" => "Heading of the clients block.",
		"clientstitledefault" => "Our clients",
		"clientssubtitle" => "Clients subtitle",
		"clientssubtitledesc" => "Text shown under the clients heading.",
		"clientssubtitledefault" => "Organizations already learning with us",
		"clientscount" => "Client count",
		"clientscountdesc" => {
			"Number of client logos. Save and reload this page to see the fields for each."
		}
		"clientsimage" => "Client image",
		"clientsimagedesc" => "Logo of this client.",
		"clientsurl" => "Client link",
		"clientsurldesc" => "Website of this client. Leave empty for no link.",

		// Footer
		"getintouchcontent" => "Get in touch",
		"getintouchcontentdesc" => "Text shown in the contact column of the footer.",
		"website" => "Website",
		"websitedesc" => "Main company website shown in the footer.",
		"mobile" => "Mobile",
		"mobiledesc" => "Phone number shown in the footer.",
		"mail" => "E-mail",
		"maildesc" => "Contact e-mail shown in the footer.",
		"facebook" => "Facebook url",
		"facebookdesc" => "Your organization's Facebook page.",
		"twitter" => "Twitter url",
		"twitterdesc" => "Your organization's Twitter account.",
		"googleplus" => "Google+ url",
		"googleplusdesc" => "Your organization's Google+ page.",
		"linkedin" => "LinkedIn url",
		"linkedindesc" => "Your organization's LinkedIn page.",
		"youtube" => "YouTube url",
		"youtubedesc" => "Your organization's YouTube channel.",
		"instagram" => "Instagram url",
		"instagramdesc" => "Your organization's Instagram account.",
		"topfooterimg" => "Top footer background",
		"topfooterimgdesc" => "Background image of the upper footer area.",
		"disablebottomfooter" => "Disable bottom footer",
		"disablebottomfooterdesc" => "Hide the bottom footer bar entirely.",

		// Forum
		"forumsettingsdesc" => {
			"Wrap forum notification mails in a themed HTML header and footer. \
			Enable the custom template and fill in both parts below."
		}
		"forumcustomtemplate" => "Use custom template",
		"forumcustomtemplatedesc" => "Send forum notification mails with the template below.",
		"forumhtmlemailheader" => "Mail header",
		"forumhtmlemailheaderdesc" => "HTML inserted above the message body.",
		"forumhtmlemailfooter" => "Mail footer",
		"forumhtmlemailfooterdesc" => "HTML inserted below the message body.",

		_ => return None,
	})
}


// vim: ts=4
