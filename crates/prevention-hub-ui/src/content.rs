//! Static page content: prevention articles and the about page.

/// One prevention article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    /// Article title shown in the selector.
    pub title: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

/// One titled section of the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    /// Section heading.
    pub heading: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

/// Sidebar note shown under the navigation menu.
pub const SIDEBAR_NOTE: &str = "Developed by Healthcare & Coding Enthusiasts with the goal to better Sickness Prevention";

/// Looks up an article by exact title.
pub fn article(title: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.title == title)
}

/// Article titles in selector order.
pub fn article_titles() -> impl Iterator<Item = &'static str> {
    ARTICLES.iter().map(|article| article.title)
}

/// Article catalogue in selector order.
pub static ARTICLES: [Article; 5] = [
    Article {
        title: r#"Understanding Type 2 Diabetes: A Comprehensive Overview"#,
        body: r#"Type 2 diabetes mellitus (T2DM) is a complex metabolic disorder characterized by hyperglycemia resulting from defects in insulin secretion, insulin action, or both. It is a progressive condition that can lead to serious health complications if not managed effectively.

**The Role of Insulin:** Insulin, a hormone produced by the pancreas, plays a crucial role in regulating blood glucose levels. It allows glucose from the bloodstream to enter cells, where it can be used for energy. In T2DM, the body either doesn't produce enough insulin (insulin deficiency) or the cells become resistant to the insulin that is produced (insulin resistance).

**Risk Factors:** Several factors can increase the risk of developing T2DM, including:
- **Obesity and Overweight:** Excess body weight, particularly abdominal fat, is a major risk factor.
- **Family History:** Having a close relative with T2DM increases your likelihood of developing the condition.
- **Age:** The risk of T2DM increases with age, particularly after 45.
- **Physical Inactivity:** Lack of regular exercise contributes to insulin resistance.
- **Unhealthy Diet:** A diet high in sugary drinks, processed foods, and unhealthy fats can increase the risk.
- **Gestational Diabetes:** Women who had gestational diabetes during pregnancy have a higher risk of developing T2DM later in life.
- **Certain Ethnicities:** Some ethnic groups, such as African Americans, Hispanic/Latino Americans, American Indians, and Asian Americans, have a higher prevalence of T2DM.

**Symptoms:** The onset of T2DM can be gradual, and many people may not experience noticeable symptoms in the early stages. However, some common symptoms include:
- Increased thirst (polydipsia)
- Frequent urination (polyuria)
- Increased hunger (polyphagia)
- Unexplained weight loss
- Fatigue
- Blurred vision
- Slow-healing sores or frequent infections

Early diagnosis and management are crucial to prevent or delay the long-term complications of T2DM, which can include heart disease, stroke, kidney disease, nerve damage (neuropathy), and eye damage (retinopathy)."#,
    },
    Article {
        title: r#"The Cornerstone of Prevention: Lifestyle Modifications"#,
        body: r#"Lifestyle modifications are the most effective strategies for preventing or delaying the onset of type 2 diabetes, especially in individuals at high risk. These changes focus on diet, physical activity, and weight management.

**Dietary Strategies:**
- **Emphasize Whole Foods:** Build your diet around whole, unprocessed foods such as fruits, vegetables, whole grains, and lean protein sources.
- **Limit Sugary Drinks and Processed Foods:** These are often high in calories, unhealthy fats, and added sugars, contributing to weight gain and insulin resistance.
- **Increase Fiber Intake:** Dietary fiber, found in fruits, vegetables, and whole grains, helps regulate blood sugar levels and promotes satiety.
- **Choose Healthy Fats:** Opt for unsaturated fats found in avocados, nuts, seeds, and olive oil, while limiting saturated and trans fats.
- **Control Portion Sizes:** Being mindful of how much you eat can help manage calorie intake and prevent weight gain.

**Physical Activity Recommendations:**
- **Aim for Regular Exercise:** Engage in at least 150 minutes of moderate-intensity aerobic activity per week, such as brisk walking, cycling, or swimming.
- **Include Strength Training:** Incorporate strength training exercises at least two days a week to build muscle mass, which can improve insulin sensitivity.
- **Reduce Sedentary Time:** Break up long periods of sitting with short bursts of activity throughout the day.

**Weight Management:**
- **Achieve and Maintain a Healthy Weight:** Losing even a small amount of weight (5-7% of body weight) can significantly reduce the risk of developing T2DM.
- **Set Realistic Goals:** Focus on gradual and sustainable weight loss through a combination of diet and exercise.
- **Seek Support:** If you are struggling to lose weight, consider seeking guidance from a healthcare professional or a registered dietitian.

Adopting these lifestyle modifications can have a profound impact on reducing your risk of type 2 diabetes and improving your overall health."#,
    },
    Article {
        title: r#"The Power of Physical Activity: Preventing Diabetes and Improving Health"#,
        body: r#"Regular physical activity is a cornerstone of diabetes prevention and offers a wide range of health benefits beyond blood sugar control.

**Mechanisms of Action:**
- **Improved Insulin Sensitivity:** Exercise makes your body's cells more responsive to insulin, allowing glucose to enter cells more effectively and lowering blood sugar levels.
- **Weight Management:** Physical activity helps burn calories, contributing to weight loss and the maintenance of a healthy weight, which reduces insulin resistance.
- **Lower Blood Sugar Levels:** During and after exercise, your muscles use glucose for energy, helping to lower blood sugar levels.
- **Reduced Cardiovascular Risk:** Regular exercise improves heart health, lowers blood pressure and cholesterol levels, and reduces the risk of heart disease and stroke, common complications of diabetes.
- **Increased Muscle Mass:** Strength training helps build muscle, which is more metabolically active than fat tissue, further improving glucose utilization.

**Types of Exercise:**
- **Aerobic Exercise:** Activities that get your heart rate up, such as brisk walking, running, swimming, cycling, dancing, and hiking. Aim for at least 150 minutes of moderate-intensity or 75 minutes of vigorous-intensity aerobic activity per week, or a combination of both.
- **Strength Training:** Exercises that work your major muscle groups, such as lifting weights, using resistance bands, or doing bodyweight exercises. Aim for at least two days a week.
- **Flexibility and Balance Exercises:** Activities like stretching and yoga can improve flexibility and balance, reducing the risk of falls, which is particularly important for older adults.

**Making Exercise a Habit:**
- **Start Slowly:** If you are new to exercise, begin with short, low-intensity workouts and gradually increase the duration and intensity.
- **Find Activities You Enjoy:** Choosing activities you like will make it easier to stick with a regular exercise routine.
- **Make it Part of Your Routine:** Schedule exercise into your day like any other important appointment.
- **Find an Exercise Buddy:** Exercising with a friend can provide motivation and accountability.

Incorporating regular physical activity into your lifestyle is a powerful tool for preventing diabetes and improving your overall well-being."#,
    },
    Article {
        title: r#"Nutrition and Diabetes Prevention: Fueling Your Body the Right Way"#,
        body: r#"A well-balanced and nutritious diet plays a vital role in preventing type 2 diabetes by helping to maintain a healthy weight, regulate blood sugar levels, and improve insulin sensitivity.

**Key Dietary Principles:**
- **Prioritize Whole Grains:** Choose whole grains like brown rice, quinoa, oats, and whole-wheat bread over refined grains, which are digested quickly and can cause rapid blood sugar spikes.
- **Load Up on Fruits and Vegetables:** These are rich in fiber, vitamins, minerals, and antioxidants, and are generally low in calories. Aim for a variety of colors to get a wide range of nutrients.
- **Choose Lean Protein Sources:** Opt for lean protein sources such as fish, poultry without skin, beans, lentils, and tofu. Limit red and processed meats.
- **Incorporate Healthy Fats:** Include sources of unsaturated fats like avocados, nuts, seeds, and olive oil. Limit saturated and trans fats found in processed foods and fatty meats.
- **Limit Added Sugars:** Reduce your intake of sugary drinks (soda, juice), candy, pastries, and other foods high in added sugars, which contribute to weight gain and increase diabetes risk.
- **Control Portion Sizes:** Be mindful of how much you are eating, even of healthy foods, to manage calorie intake.
- **Stay Hydrated:** Drink plenty of water throughout the day. Avoid sugary beverages.

**Practical Tips for Healthy Eating:**
- **Plan Your Meals:** Planning ahead can help you make healthier choices and avoid impulsive, unhealthy options.
- **Read Food Labels:** Pay attention to serving sizes, calories, sugar content, and fat content.
- **Cook at Home More Often:** This gives you more control over the ingredients and preparation methods.
- **Be Mindful While Eating:** Pay attention to your hunger and fullness cues, and eat slowly.

Making sustainable changes to your eating habits is a crucial step in preventing type 2 diabetes and promoting long-term health."#,
    },
    Article {
        title: r#"The Importance of Sleep and Stress Management in Diabetes Prevention"#,
        body: r#"While diet and exercise are often the primary focus of diabetes prevention, adequate sleep and effective stress management also play significant roles in regulating blood sugar levels and overall metabolic health.

**The Impact of Sleep:**
- **Insulin Sensitivity:** Chronic sleep deprivation can lead to insulin resistance, making it harder for your body to use insulin effectively and increasing blood sugar levels.
- **Hormone Regulation:** Lack of sleep can disrupt the balance of hormones that regulate appetite and metabolism, potentially leading to increased hunger, weight gain, and an increased risk of diabetes.
- **Glucose Metabolism:** Studies have shown that insufficient sleep can impair glucose tolerance, meaning the body is less efficient at processing glucose.

**Tips for Better Sleep:**
- **Establish a Regular Sleep Schedule:** Go to bed and wake up around the same time each day, even on weekends.
- **Create a Relaxing Bedtime Routine:** Wind down before bed with activities like reading, taking a warm bath, or listening to calming music.
- **Optimize Your Sleep Environment:** Make sure your bedroom is dark, quiet, and cool.
- **Avoid Caffeine and Alcohol Before Bed:** These substances can interfere with sleep.
- **Limit Screen Time Before Bed:** The blue light emitted from electronic devices can suppress melatonin production, making it harder to fall asleep.

**The Role of Stress:**
- **Stress Hormones:** When you are stressed, your body releases hormones like cortisol and adrenaline, which can raise blood sugar levels.
- **Unhealthy Coping Mechanisms:** Chronic stress can lead to unhealthy coping behaviors like overeating, choosing unhealthy foods, and reducing physical activity, all of which increase diabetes risk.

**Effective Stress Management Techniques:**
- **Regular Exercise:** Physical activity is a great way to relieve stress and improve mood.
- **Mindfulness and Meditation:** These practices can help you focus on the present moment and reduce feelings of stress and anxiety.
- **Deep Breathing Exercises:** Simple breathing techniques can help calm your nervous system.
- **Spending Time on Hobbies:** Engaging in enjoyable activities can help you relax and reduce stress.
- **Building a Strong Social Support Network:** Connecting with friends and family can provide emotional support during stressful times.
- **Getting Enough Sleep:** As mentioned earlier, adequate sleep is crucial for managing stress.

Prioritizing good sleep habits and developing effective stress management techniques are important components of a comprehensive diabetes prevention strategy."#,
    },
];

/// About page sections: vision, mission, values.
pub static ABOUT_SECTIONS: [AboutSection; 3] = [
    AboutSection {
        heading: r#"Our Vision"#,
        body: r#"To empower individuals with knowledge and tools to proactively manage their health,
significantly reducing the prevalence and impact of type 2 diabetes in our community
and beyond. We envision a future where informed lifestyle choices lead to healthier,
longer lives, free from the burden of preventable chronic diseases."#,
    },
    AboutSection {
        heading: r#"Our Mission"#,
        body: r#"Our mission is to provide an accessible, user-friendly platform that combines
personalized diabetes risk assessment with comprehensive educational resources.
We strive to:
- Offer a reliable initial assessment of type 2 diabetes risk based on individual health data.
- Deliver clear, evidence-based information on diabetes prevention and management.
- Encourage proactive engagement in healthy lifestyle modifications.
- Foster a sense of empowerment and informed decision-making regarding personal health."#,
    },
    AboutSection {
        heading: r#"Our Key Values"#,
        body: r#"We are guided by the following core values in everything we do:

- **Empowerment:** We believe in equipping individuals with the knowledge and tools they need to take control of their health journey.
- **Accessibility:** We are committed to making our platform and resources easily available to everyone, regardless of their background or technical expertise.
- **Reliability:** We strive to provide accurate risk assessments based on established models and present information that is grounded in scientific evidence.
- **Education:** We are passionate about delivering clear, understandable, and actionable information to promote health literacy.
- **User-Centricity:** We prioritize the needs and experience of our users, continuously seeking to improve and enhance our platform.
- **Privacy and Security:** We are dedicated to protecting the privacy and security of user data with the utmost care and responsibility.
- **Continuous Improvement:** We are committed to ongoing learning and development, constantly seeking ways to enhance the accuracy, functionality, and value of our hub.

We believe that by adhering to these values, we can make a meaningful difference in the lives of individuals and contribute to a healthier future."#,
    },
];
